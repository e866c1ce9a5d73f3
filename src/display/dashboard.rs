//! Dashboard formatting
//!
//! Renders the month-to-date summary, the recent-transactions feed, and the
//! daily expense trend.

use chrono::NaiveDate;

use super::report::{format_bar, format_money_colored, separator, truncate};
use crate::models::Money;
use crate::services::{DashboardStats, MonthlySummary, RecentTransaction};

const TREND_BAR_WIDTH: usize = 30;

/// Format the dashboard summary cards
pub fn format_dashboard(stats: &DashboardStats, summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Dashboard: {} to {}\n",
        stats.period_start, stats.period_end
    ));
    output.push_str(&format!("{}\n", separator(40)));
    output.push_str(&format!(
        "Total Income:   {}\n",
        stats.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses: {}\n",
        stats.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Balance:    {}\n",
        format_money_colored(stats.net_balance, symbol)
    ));
    output.push_str(&format!("Top Category:   {}\n", summary.top_category_label()));

    output
}

/// Format the recent-transactions feed
pub fn format_recent(entries: &[RecentTransaction], symbol: &str, date_format: &str) -> String {
    if entries.is_empty() {
        return "No recent transactions.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10}  {:8}  {:18}  {:33}  {:>12}\n",
        "Date", "Type", "Category/Source", "Description", "Amount"
    ));
    output.push_str(&format!("{}\n", separator(89)));

    for entry in entries {
        output.push_str(&format!(
            "{:10}  {:8}  {:18}  {:33}  {:>12}\n",
            entry.date.format(date_format).to_string(),
            entry.kind.to_string(),
            truncate(&entry.label, 18),
            entry.description,
            entry.signed_amount(symbol)
        ));
    }

    output
}

/// Format a daily series as one bar per day
pub fn format_trend(series: &[(NaiveDate, Money)], symbol: &str) -> String {
    let max = series
        .iter()
        .map(|(_, amount)| amount.as_units_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for (day, amount) in series {
        output.push_str(&format!(
            "{}  {}  {}\n",
            day,
            format_bar(amount.as_units_f64(), max, TREND_BAR_WIDTH),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    #[test]
    fn test_format_recent() {
        let entries = vec![RecentTransaction {
            date: date(10),
            kind: TransactionKind::Income,
            label: "Freelance".to_string(),
            description: "Logo design".to_string(),
            amount: Money::from_cents(80000),
        }];
        let output = format_recent(&entries, "$", "%Y-%m-%d");

        assert!(output.contains("2025-04-10"));
        assert!(output.contains("Freelance"));
        assert!(output.contains("+$800.00"));
    }

    #[test]
    fn test_format_trend_scales_to_max() {
        let series = vec![(date(1), Money::from_cents(1000)), (date(2), Money::zero())];
        let output = format_trend(&series, "$");
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(&"█".repeat(TREND_BAR_WIDTH)));
        assert!(lines[1].contains("$0.00"));
    }
}
