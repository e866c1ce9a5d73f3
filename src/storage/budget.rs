//! Budget repository backed by budgets.json
//!
//! Budgets are keyed by (category, month, year); writing an existing key
//! replaces the stored amount in place.

use std::path::PathBuf;

use crate::error::FinanceError;
use crate::models::Budget;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Budgets for a month, in the order they were first set
    pub fn get_for_month(&self, month: u32, year: i32) -> Result<Vec<Budget>, FinanceError> {
        let data: BudgetData = read_json(&self.path)?;
        Ok(data
            .budgets
            .into_iter()
            .filter(|b| b.month == month && b.year == year)
            .collect())
    }

    /// Insert or replace the budget with the same key; returns true if replaced
    pub fn upsert(&self, budget: Budget) -> Result<bool, FinanceError> {
        let mut data: BudgetData = read_json(&self.path)?;
        let key = budget.key();

        let replaced = match data.budgets.iter_mut().find(|b| b.key() == key) {
            Some(existing) => {
                *existing = budget;
                true
            }
            None => {
                data.budgets.push(budget);
                false
            }
        };

        write_json_atomic(&self.path, &data)?;
        Ok(replaced)
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data: BudgetData = read_json(&self.path)?;
        Ok(data.budgets.len())
    }
}
