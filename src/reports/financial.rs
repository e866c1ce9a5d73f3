//! Financial Report
//!
//! Income and expense summary for a trailing period: totals, net savings,
//! income by source, and expenses by category with each category's share.

use std::io::Write;

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use super::aggregate::{expenses_by_category, income_by_source, net_balance, total_amount};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategorizedExpense, DateRange, Income, Money, ReportPeriod};
use crate::storage::TransactionStore;

/// Income total for one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceTotal {
    pub source: String,
    pub amount: Money,
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Share of total expenses, 0 when there were no expenses
    pub percent_of_total: f64,
}

/// Financial report for a date range
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    /// Display name of the period, e.g. "Last 30 days"
    pub label: String,
    pub range: DateRange,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_savings: Money,
    /// Largest first; equal amounts keep first-seen order
    pub income_by_source: Vec<SourceTotal>,
    /// Largest first; equal amounts keep first-seen order
    pub expense_by_category: Vec<CategoryShare>,
    pub income_count: usize,
    pub expense_count: usize,
}

impl FinancialReport {
    /// Build a report from already-fetched transactions
    pub fn compose(
        label: impl Into<String>,
        range: DateRange,
        income: &[Income],
        expenses: &[CategorizedExpense],
    ) -> Self {
        let total_income = total_amount(income);
        let total_expenses = total_amount(expenses);

        let income_by_source = income_by_source(income)
            .sorted_desc()
            .into_iter()
            .map(|(source, amount)| SourceTotal { source, amount })
            .collect();

        let expense_by_category = expenses_by_category(expenses)
            .sorted_desc()
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percent_of_total: amount.percent_of(total_expenses),
                category,
                amount,
            })
            .collect();

        Self {
            label: label.into(),
            range,
            total_income,
            total_expenses,
            net_savings: net_balance(total_income, total_expenses),
            income_by_source,
            expense_by_category,
            income_count: income.len(),
            expense_count: expenses.len(),
        }
    }

    /// Fetch the period's transactions and build the report
    pub fn generate<S: TransactionStore + ?Sized>(
        store: &S,
        period: ReportPeriod,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        let range = period.range(today);
        debug!("Generating '{}' report for {}", period, range);

        let income = store.fetch_income(range)?;
        let expenses = store.fetch_expenses(range)?;

        Ok(Self::compose(period.label(), range, &income, &expenses))
    }

    /// Like [`generate`](Self::generate), resolving the period by name.
    ///
    /// Unknown names fail with [`FinanceError::UnknownPeriod`] instead of
    /// silently widening to a year.
    pub fn generate_named<S: TransactionStore + ?Sized>(
        store: &S,
        period_name: &str,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        let period: ReportPeriod = period_name.parse()?;
        Self::generate(store, period, today)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("FINANCIAL REPORT - {}\n", self.label));
        output.push_str(&format!("Period: {}\n", self.range));
        output.push_str(&"=".repeat(50));
        output.push_str("\n\n");

        output.push_str("SUMMARY:\n");
        output.push_str(&format!(
            "Total Income: {}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net Savings: {}\n\n",
            self.net_savings.format_with_symbol(symbol)
        ));

        output.push_str("INCOME BREAKDOWN:\n");
        if self.income_by_source.is_empty() {
            output.push_str("  (no income)\n");
        }
        for entry in &self.income_by_source {
            output.push_str(&format!(
                "  {}: {}\n",
                entry.source,
                entry.amount.format_with_symbol(symbol)
            ));
        }

        output.push_str("\nEXPENSE BREAKDOWN:\n");
        if self.expense_by_category.is_empty() {
            output.push_str("  (no expenses)\n");
        }
        for entry in &self.expense_by_category {
            output.push_str(&format!(
                "  {}: {} ({:.1}%)\n",
                entry.category,
                entry.amount.format_with_symbol(symbol),
                entry.percent_of_total
            ));
        }

        output
    }

    /// Export the breakdown rows as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let export_err = |e: csv::Error| FinanceError::Io(format!("CSV export failed: {}", e));
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Start Date", "End Date", "Type", "Name", "Amount", "Percentage"])
            .map_err(export_err)?;

        let start_date = self.range.start.to_string();
        let end_date = self.range.end.to_string();
        let (start, end) = (start_date.as_str(), end_date.as_str());

        for entry in &self.income_by_source {
            let amount = format!("{:.2}", entry.amount.as_units_f64());
            csv_writer
                .write_record([start, end, "Income", entry.source.as_str(), amount.as_str(), ""])
                .map_err(export_err)?;
        }

        for entry in &self.expense_by_category {
            let amount = format!("{:.2}", entry.amount.as_units_f64());
            let percent = format!("{:.2}", entry.percent_of_total);
            csv_writer
                .write_record([
                    start,
                    end,
                    "Expense",
                    entry.category.as_str(),
                    amount.as_str(),
                    percent.as_str(),
                ])
                .map_err(export_err)?;
        }

        let net = format!("{:.2}", self.net_savings.as_units_f64());
        csv_writer
            .write_record([start, end, "Net", "", net.as_str(), ""])
            .map_err(export_err)?;

        csv_writer
            .flush()
            .map_err(|e| FinanceError::Io(format!("CSV export failed: {}", e)))
    }
}
