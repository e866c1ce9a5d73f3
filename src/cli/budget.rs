//! Budget CLI commands
//!
//! Setting monthly category budgets and showing how each one is tracking.

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::budget::format_budget_statuses;
use crate::error::FinanceResult;
use crate::services::BudgetService;
use crate::storage::TransactionStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a category, replacing any existing amount
    Set {
        /// Category name
        category: String,
        /// Amount (e.g., "400" or "400.00")
        amount: String,
        /// Month number (1-12, defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show budget versus actual spending
    Status {
        /// Month number (1-12, defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
            year,
        } => {
            let amount = parse_amount(&amount)?;
            let month = month.unwrap_or_else(|| today.month());
            let year = year.unwrap_or_else(|| today.year());

            let budget = service.upsert_budget_by_name(&category, amount, month, year)?;
            println!(
                "Budget for {} in {:02}/{} set to {}",
                category,
                budget.month,
                budget.year,
                budget.amount.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Status { month, year } => {
            let month = month.unwrap_or_else(|| today.month());
            let year = year.unwrap_or_else(|| today.year());

            let statuses = service.status_for_month(month, year)?;
            println!("Budget Status: {:02}/{}", month, year);
            println!("{}", "=".repeat(50));
            print!("{}", format_budget_statuses(&statuses, symbol));

            let overspent = statuses.iter().filter(|s| s.is_overspent()).count();
            if overspent > 0 {
                println!();
                let noun = if overspent == 1 { "category" } else { "categories" };
                println!("{} {} over budget", overspent, noun);
            }
        }
    }

    Ok(())
}
