//! Calendar periods used for grouping and trend comparison
//!
//! A [`Period`] is identified by its kind (day, week, month) and its canonical
//! start date. Week boundaries depend on an explicit [`WeekStart`] choice
//! rather than on the host locale.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar granularity of a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    #[default]
    Month,
}

impl PeriodKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PeriodKind {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            _ => Err(PeriodParseError::InvalidKind(s.to_string())),
        }
    }
}

/// The weekday a week begins on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Days between the start of the week and `date`
    fn offset(&self, date: NaiveDate) -> i64 {
        let weekday = date.weekday();
        let days = match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        };
        i64::from(days)
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => write!(f, "sunday"),
            Self::Monday => write!(f, "monday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            _ => Err(PeriodParseError::InvalidWeekStart(s.to_string())),
        }
    }
}

/// A calendar-aligned day, week or month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    start: NaiveDate,
    kind: PeriodKind,
}

impl Period {
    /// The period of `kind` containing `date`
    pub fn containing(kind: PeriodKind, date: NaiveDate, week_start: WeekStart) -> Self {
        Self {
            kind,
            start: start_of(kind, date, week_start),
        }
    }

    /// The period of `kind` containing today's local date
    pub fn current(kind: PeriodKind, week_start: WeekStart) -> Self {
        Self::containing(kind, Local::now().date_naive(), week_start)
    }

    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// First day of the period
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day after the period
    pub fn end_exclusive(&self) -> NaiveDate {
        match self.kind {
            PeriodKind::Day => self.start + Duration::days(1),
            PeriodKind::Week => self.start + Duration::days(7),
            PeriodKind::Month => self.start + Months::new(1),
        }
    }

    /// Last day of the period (inclusive)
    pub fn end(&self) -> NaiveDate {
        self.end_exclusive() - Duration::days(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end_exclusive()
    }

    /// The immediately preceding period of the same kind
    pub fn prev(&self) -> Self {
        let start = match self.kind {
            PeriodKind::Day => self.start - Duration::days(1),
            PeriodKind::Week => self.start - Duration::days(7),
            PeriodKind::Month => self.start - Months::new(1),
        };
        Self {
            kind: self.kind,
            start,
        }
    }

    /// The immediately following period of the same kind
    pub fn next(&self) -> Self {
        Self {
            kind: self.kind,
            start: self.end_exclusive(),
        }
    }

    /// Short machine-friendly label: `2025-07-09`, `2025-07-06+7d`, `2025-07`
    pub fn label(&self) -> String {
        match self.kind {
            PeriodKind::Day => self.start.format("%Y-%m-%d").to_string(),
            PeriodKind::Week => format!("{}+7d", self.start.format("%Y-%m-%d")),
            PeriodKind::Month => self.start.format("%Y-%m").to_string(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Canonical start-of-period date for `date`
pub fn start_of(kind: PeriodKind, date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    match kind {
        PeriodKind::Day => date,
        PeriodKind::Week => date - Duration::days(week_start.offset(date)),
        PeriodKind::Month => date.with_day(1).unwrap_or(date),
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodParseError {
    #[error("Invalid period: {0} (expected day, week or month)")]
    InvalidKind(String),
    #[error("Invalid week start: {0} (expected sunday or monday)")]
    InvalidWeekStart(String),
}
