//! Expense repository backed by expenses.json

use std::path::PathBuf;

use log::debug;

use crate::error::FinanceError;
use crate::models::{DateRange, Expense};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Expenses dated within `range`, newest first, ties in insertion order
    pub fn get_by_date_range(&self, range: DateRange) -> Result<Vec<Expense>, FinanceError> {
        let data: ExpenseData = read_json(&self.path)?;

        let mut expenses: Vec<_> = data
            .expenses
            .into_iter()
            .filter(|e| range.contains(e.date))
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        debug!("Fetched {} expenses for {}", expenses.len(), range);
        Ok(expenses)
    }

    pub fn insert(&self, expense: Expense) -> Result<(), FinanceError> {
        let mut data: ExpenseData = read_json(&self.path)?;
        data.expenses.push(expense);
        write_json_atomic(&self.path, &data)
    }
}
