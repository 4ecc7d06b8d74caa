//! Report formatting for terminal output
//!
//! Renders the home summary, trend comparisons and the history screen.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::{format_date, format_money, format_percent, format_signed_money, period_title};
use crate::models::{Period, PeriodKind};
use crate::reports::{CategoryTotal, DailyTotal, SpendingSummary, TrendComparison, TrendDirection};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Spent")]
    total: String,
    #[tabled(rename = "")]
    bar: String,
}

/// A horizontal bar proportional to `value / max`
fn format_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

fn unit(period: Period) -> &'static str {
    match period.kind() {
        PeriodKind::Day => "yesterday",
        PeriodKind::Week => "last week",
        PeriodKind::Month => "last month",
    }
}

fn format_top(top: &[CategoryTotal], currency: &str) -> String {
    if top.is_empty() {
        return "  No spending recorded yet.\n".to_string();
    }
    top.iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                "  {}. {:<20} {:>12}\n",
                i + 1,
                t.category_name,
                format_money(t.total, currency)
            )
        })
        .collect()
}

/// Format a period-over-period comparison
pub fn format_trend(trend: &TrendComparison, currency: &str) -> String {
    let vs = unit(trend.period);
    let mut output = String::new();

    output.push_str(&format!("{}\n", period_title(trend.period)));
    output.push_str(&format!(
        "  This period:  {}\n",
        format_money(trend.current_total, currency)
    ));
    output.push_str(&format!(
        "  Prior period: {}\n",
        format_money(trend.prior_total, currency)
    ));
    output.push_str(&format!(
        "  Change:       {} ({})\n\n",
        format_signed_money(trend.delta, currency),
        format_percent(trend.percent_change)
    ));

    match trend.direction {
        TrendDirection::Up => output.push_str(&format!(
            "You spent {} more than {}\n\n",
            format_money(trend.delta, currency),
            vs
        )),
        TrendDirection::Down => output.push_str(&format!(
            "You spent {} less than {}\n\n",
            format_money(trend.delta.abs(), currency),
            vs
        )),
    }

    if trend.increases.is_empty() {
        output.push_str(&format!(
            "No categories increased in spending compared to {}.\n",
            vs
        ));
    } else {
        output.push_str("Top categories with increased spending:\n");
        for increase in &trend.increases {
            output.push_str(&format!(
                "  {:<20} {} vs {}\n",
                increase.category_name,
                format_signed_money(increase.increase, currency),
                vs
            ));
        }
    }

    output
}

/// Format the home screen summary
pub fn format_summary(summary: &SpendingSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Today: {}\n\n", format_date(summary.today)));
    output.push_str(&format!(
        "This week   {:>12}  ({} vs last week)\n",
        format_money(summary.week_total, currency),
        format_percent(summary.week_trend.percent_change)
    ));
    output.push_str(&format!(
        "This month  {:>12}  ({} vs last month)\n\n",
        format_money(summary.month_total, currency),
        format_percent(summary.month_trend.percent_change)
    ));

    output.push_str("Top categories:\n");
    output.push_str(&format_top(&summary.top_categories, currency));
    output
}

/// Format the history screen: a daily series and the top categories of a period
pub fn format_history(
    period: Period,
    days: &[DailyTotal],
    top: &[CategoryTotal],
    currency: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n\n", period_title(period)));

    if days.is_empty() {
        output.push_str("No expenses in this period.\n");
        return output;
    }

    let max = days
        .iter()
        .map(|d| d.total.as_f64())
        .fold(0.0_f64, f64::max);

    let rows = days.iter().map(|d| DayRow {
        date: format_date(d.date),
        total: format_money(d.total, currency),
        bar: format_bar(d.total.as_f64(), max, BAR_WIDTH),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::blank())
        .modify(Columns::single(1), Alignment::right());
    output.push_str(&format!("{}\n\n", table));

    output.push_str("Top categories:\n");
    output.push_str(&format_top(top, currency));
    output
}
