//! Dashboard service
//!
//! Month-to-date totals, the recent-transactions feed, the month's top
//! spending category, and the daily expense trend. Every call fetches fresh
//! data; `today` is always supplied by the caller.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::error::FinanceResult;
use crate::models::{DateRange, Money, Transaction, TransactionKind};
use crate::reports::aggregate::{
    daily_series, expenses_by_category, net_balance, top_key, total_amount,
};
use crate::storage::TransactionStore;

/// Marker appended to shortened descriptions
const ELLIPSIS: &str = "...";

/// Month-to-date summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_balance: Money,
    /// True when net balance is zero or more
    pub is_positive: bool,
}

/// One line of the recent-transactions feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTransaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    /// Income source or expense category name
    pub label: String,
    /// Shortened to the feed's description width
    pub description: String,
    pub amount: Money,
}

impl RecentTransaction {
    fn from_transaction(transaction: &Transaction, description_width: usize) -> Self {
        Self {
            date: transaction.date(),
            kind: transaction.kind(),
            label: transaction.label().to_string(),
            description: shorten(transaction.description(), description_width),
            amount: transaction.amount(),
        }
    }

    /// "+$10.00" for income, "-$10.00" for expenses
    pub fn signed_amount(&self, symbol: &str) -> String {
        let sign = match self.kind {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        format!("{}{}", sign, self.amount.format_with_symbol(symbol))
    }
}

/// Current month's spending headline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub range: DateRange,
    pub total_expenses: Money,
    /// `None` when nothing was spent this month
    pub top_category: Option<String>,
}

impl MonthlySummary {
    pub fn top_category_label(&self) -> &str {
        self.top_category.as_deref().unwrap_or("None")
    }
}

/// Service for dashboard data
pub struct DashboardService<'a> {
    store: &'a dyn TransactionStore,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service
    pub fn new(store: &'a dyn TransactionStore) -> Self {
        Self { store }
    }

    /// Totals from the first of `today`'s month through `today`
    pub fn dashboard(&self, today: NaiveDate) -> FinanceResult<DashboardStats> {
        let range = DateRange::month_to_date(today);
        let total_income = total_amount(&self.store.fetch_income(range)?);
        let total_expenses = total_amount(&self.store.fetch_expenses(range)?);
        let net = net_balance(total_income, total_expenses);

        Ok(DashboardStats {
            period_start: range.start,
            period_end: range.end,
            total_income,
            total_expenses,
            net_balance: net,
            is_positive: !net.is_negative(),
        })
    }

    /// Newest transactions from the trailing `window_days` window
    ///
    /// Income is listed ahead of expenses before the stable sort by date, so
    /// on the same day income comes first. At most `limit` entries.
    pub fn recent_transactions(
        &self,
        today: NaiveDate,
        window_days: i64,
        limit: usize,
        description_width: usize,
    ) -> FinanceResult<Vec<RecentTransaction>> {
        let range = DateRange::trailing(today, window_days);

        let mut merged: Vec<Transaction> = self
            .store
            .fetch_income(range)?
            .into_iter()
            .map(Transaction::from)
            .collect();
        merged.extend(
            self.store
                .fetch_expenses(range)?
                .into_iter()
                .map(Transaction::from),
        );
        debug!("Merged {} transactions for {}", merged.len(), range);

        merged.sort_by(|a, b| b.date().cmp(&a.date()));

        Ok(merged
            .iter()
            .take(limit)
            .map(|t| RecentTransaction::from_transaction(t, description_width))
            .collect())
    }

    /// Top spending category of `today`'s month so far
    pub fn monthly_summary(&self, today: NaiveDate) -> FinanceResult<MonthlySummary> {
        let range = DateRange::month_to_date(today);
        let expenses = self.store.fetch_expenses(range)?;
        let grouped = expenses_by_category(&expenses);

        Ok(MonthlySummary {
            range,
            total_expenses: total_amount(&expenses),
            top_category: top_key(&grouped).map(str::to_string),
        })
    }

    /// Daily expense totals for the trailing `days` window, zero-filled
    pub fn expense_trend(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> FinanceResult<Vec<(NaiveDate, Money)>> {
        let range = DateRange::trailing(today, days);
        let expenses = self.store.fetch_expenses(range)?;
        Ok(daily_series(&expenses, range))
    }
}

/// First `width` characters plus an ellipsis when longer than `width`
fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(width).collect();
        short.push_str(ELLIPSIS);
        short
    }
}
