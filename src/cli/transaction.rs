//! Income and expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_amount, parse_date_or};
use crate::config::settings::Settings;
use crate::error::FinanceResult;
use crate::services::TransactionService;
use crate::storage::TransactionStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record an income
    Add {
        /// Amount (e.g., "2500" or "2500.00")
        amount: String,
        /// Where the money came from (e.g., "Salary")
        #[arg(short, long)]
        source: String,
        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// What the money was spent on
        #[arg(long)]
        description: String,
        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle an income command
pub fn handle_income_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: IncomeCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or(date.as_deref(), today)?;
            let income = service.add_income(amount, &source, date, &description)?;

            println!(
                "Recorded income: {} from {} on {}",
                income.amount.format_with_symbol(&settings.currency_symbol),
                income.source,
                income.date.format(&settings.date_format)
            );
        }
    }

    Ok(())
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or(date.as_deref(), today)?;
            let expense = service.add_expense(amount, &category, &description, date)?;

            println!(
                "Recorded expense: {} in {} on {}",
                expense.amount.format_with_symbol(&settings.currency_symbol),
                category,
                expense.date.format(&settings.date_format)
            );
        }
    }

    Ok(())
}
