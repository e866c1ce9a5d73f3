//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::{handle_dashboard_command, handle_recent_command, DashboardArgs, RecentArgs};
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{
    handle_expense_command, handle_income_command, ExpenseCommands, IncomeCommands,
};

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// Parse an optional YYYY-MM-DD date, defaulting to `today`
pub(crate) fn parse_date_or(date: Option<&str>, today: NaiveDate) -> FinanceResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            FinanceError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(today),
    }
}

/// Parse a user-entered amount such as "12.50" or "$12.50"
pub(crate) fn parse_amount(amount: &str) -> FinanceResult<Money> {
    Ok(Money::parse(amount)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_or() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(parse_date_or(None, today).unwrap(), today);
        assert_eq!(
            parse_date_or(Some("2025-02-03"), today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
        );
        assert!(parse_date_or(Some("03/02/2025"), today).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap().cents(), 1250);
        assert!(parse_amount("twelve").unwrap_err().is_invalid_amount());
    }
}
