use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use finance_tracker::cli::{
    handle_budget_command, handle_category_command, handle_dashboard_command,
    handle_expense_command, handle_income_command, handle_recent_command, handle_report_command,
    DashboardArgs, RecentArgs, ReportArgs,
};
use finance_tracker::config::{paths::FinancePaths, settings::Settings};
use finance_tracker::models::DEFAULT_CATEGORIES;
use finance_tracker::storage::{initialize_storage, JsonStore};

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal income, expense and budget tracker",
    long_about = "Track income and expenses by category, set monthly category \
                  budgets, and see where the money went over the last week, \
                  month, quarter or year."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Month-to-date summary and recent transactions
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Recent income and expenses
    Recent(RecentArgs),

    /// Financial report for a trailing period
    Report(ReportArgs),

    /// Budget commands
    #[command(subcommand)]
    Budget(finance_tracker::cli::BudgetCommands),

    /// Income commands
    #[command(subcommand)]
    Income(finance_tracker::cli::IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(finance_tracker::cli::ExpenseCommands),

    /// Category commands
    #[command(subcommand)]
    Category(finance_tracker::cli::CategoryCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = JsonStore::new(paths.clone())?;
    if !store.is_initialized() && !matches!(cli.command, Some(Commands::Init)) {
        info!("First run, initializing {}", paths.data_dir().display());
        initialize_storage(&paths)?;
    }

    let today = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(&store, &settings, today, args)?;
        }
        Some(Commands::Recent(args)) => {
            handle_recent_command(&store, &settings, today, args)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&store, &settings, today, args)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&store, &settings, today, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&store, &settings, today, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&store, &settings, today, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&store, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing finance tracker at: {}", paths.data_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories:");
            for (name, _) in DEFAULT_CATEGORIES {
                println!("  - {}", name);
            }
            println!();
            println!("Run 'finance category list' to see all categories.");
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Recent window (days):  {}", settings.recent_window_days);
            println!("  Recent limit:          {}", settings.recent_limit);
            println!("  Trend window (days):   {}", settings.trend_days);
            println!("  Default report period: {}", settings.default_report_period);
        }
        None => {
            println!("Finance Tracker - income, expenses and budgets");
            println!();
            println!("Run 'finance --help' for usage information.");
            println!("Run 'finance dashboard' for this month's summary.");
        }
    }

    Ok(())
}
