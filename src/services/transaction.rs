//! Transaction entry service
//!
//! Validates and records income and expenses. Records are immutable once
//! written; there is no edit or delete path.

use chrono::NaiveDate;

use super::category::CategoryService;
use crate::error::FinanceResult;
use crate::models::{Expense, Income, Money};
use crate::storage::TransactionStore;

/// Service for recording transactions
pub struct TransactionService<'a> {
    store: &'a dyn TransactionStore,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a dyn TransactionStore) -> Self {
        Self { store }
    }

    /// Record an income
    pub fn add_income(
        &self,
        amount: Money,
        source: &str,
        date: NaiveDate,
        description: &str,
    ) -> FinanceResult<Income> {
        let income = Income::new(amount, source.trim(), date, description.trim());
        income.validate()?;

        self.store.insert_income(income.clone())?;
        Ok(income)
    }

    /// Record an expense against a category chosen by name
    ///
    /// Fails with `MissingCategory` if no category has that name.
    pub fn add_expense(
        &self,
        amount: Money,
        category_name: &str,
        description: &str,
        date: NaiveDate,
    ) -> FinanceResult<Expense> {
        let category = CategoryService::new(self.store).resolve(category_name)?;

        let expense = Expense::new(amount, Some(category.id), description.trim(), date);
        expense.validate()?;

        self.store.insert_expense(expense.clone())?;
        Ok(expense)
    }
}
