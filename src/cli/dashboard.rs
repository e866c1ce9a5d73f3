//! Dashboard and recent-transactions CLI commands

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::dashboard::{format_dashboard, format_recent, format_trend};
use crate::error::FinanceResult;
use crate::services::DashboardService;
use crate::storage::TransactionStore;

/// Dashboard arguments
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Also show the daily expense trend
    #[arg(short, long)]
    pub trend: bool,

    /// Trend window in days (defaults to the configured window)
    #[arg(long)]
    pub trend_days: Option<i64>,
}

/// Recent-transactions arguments
#[derive(Args, Debug)]
pub struct RecentArgs {
    /// Trailing window in days
    #[arg(short, long)]
    pub days: Option<i64>,

    /// Maximum number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    today: NaiveDate,
    args: DashboardArgs,
) -> FinanceResult<()> {
    let service = DashboardService::new(store);
    let symbol = settings.currency_symbol.as_str();

    let stats = service.dashboard(today)?;
    let summary = service.monthly_summary(today)?;
    print!("{}", format_dashboard(&stats, &summary, symbol));

    println!();
    println!("Recent Transactions");
    let recent = service.recent_transactions(
        today,
        settings.recent_window_days,
        settings.recent_limit,
        settings.description_width,
    )?;
    println!("{}", format_recent(&recent, symbol, &settings.date_format));

    if args.trend {
        let days = args.trend_days.unwrap_or(settings.trend_days);
        println!();
        println!("Daily Expenses (last {} days)", days);
        print!("{}", format_trend(&service.expense_trend(today, days)?, symbol));
    }

    Ok(())
}

/// Handle the recent command
pub fn handle_recent_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    today: NaiveDate,
    args: RecentArgs,
) -> FinanceResult<()> {
    let recent = DashboardService::new(store).recent_transactions(
        today,
        args.days.unwrap_or(settings.recent_window_days),
        args.limit.unwrap_or(settings.recent_limit),
        settings.description_width,
    )?;
    println!(
        "{}",
        format_recent(&recent, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}
