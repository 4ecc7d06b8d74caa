use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use budgetly::cli::{
    handle_category_command, handle_expense_command, handle_export_command,
    handle_history_command, handle_home_command, handle_trend_command,
};
use budgetly::config::{paths::BudgetlyPaths, settings::Settings};
use budgetly::logging::init_tracing;
use budgetly::models::{PeriodKind, WeekStart};
use budgetly::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budgetly",
    version,
    about = "Personal expense tracker",
    long_about = "Budgetly records expenses against your own categories and shows \
                  weekly and monthly totals, history and spending trends from the \
                  command line."
)]
struct Cli {
    /// First day of the week (sunday or monday); overrides the setting
    #[arg(long, global = true)]
    week_start: Option<WeekStart>,

    /// Log more detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// This week's and this month's spending with the top categories
    Home {
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(budgetly::cli::CategoryCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(budgetly::cli::ExpenseCommands),

    /// Daily spending and top categories for the current week or month
    History {
        /// week or month
        #[arg(short, long, default_value = "week")]
        range: PeriodKind,
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Compare spending with the previous week or month
    Trend {
        /// week or month
        #[arg(short, long, default_value = "week")]
        period: PeriodKind,
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Export data to CSV
    #[command(subcommand)]
    Export(budgetly::cli::ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = BudgetlyPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(week_start) = cli.week_start {
        settings.week_start = week_start;
    }

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Budgetly at: {}", paths.base_dir().display());
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Create a category with 'budgetly category add <NAME>'.");
        }
        Some(Commands::Config) => {
            println!("Budgetly Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Week start:      {}", settings.week_start);
            println!("  Top categories:  {}", settings.top_categories);
        }
        Some(Commands::Home { as_of }) => {
            handle_home_command(&storage, &settings, as_of)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History { range, as_of }) => {
            handle_history_command(&storage, &settings, range, as_of)?;
        }
        Some(Commands::Trend { period, as_of }) => {
            handle_trend_command(&storage, &settings, period, as_of)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        None => {
            println!("Budgetly - personal expense tracker");
            println!();
            println!("Run 'budgetly --help' for usage information.");
        }
    }

    Ok(())
}
