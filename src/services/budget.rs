//! Budget service
//!
//! Sets monthly category budgets and evaluates them against actual spend.

use std::collections::HashMap;

use log::debug;

use super::category::CategoryService;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetRow, BudgetStatus, CategoryId, DateRange, Money};
use crate::storage::TransactionStore;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a dyn TransactionStore,
}

/// Evaluate each budget against its category's spend
///
/// Output follows the order of `rows`. A budget whose category has no
/// entry in `spend` is reported with zero spent.
pub fn evaluate_all(rows: &[BudgetRow], spend: &HashMap<CategoryId, Money>) -> Vec<BudgetStatus> {
    rows.iter()
        .map(|row| {
            let spent = spend
                .get(&row.budget.category_id)
                .copied()
                .unwrap_or_default();
            BudgetStatus::compute(row, spent)
        })
        .collect()
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a dyn TransactionStore) -> Self {
        Self { store }
    }

    /// Status of every budget set for a month
    pub fn status_for_month(&self, month: u32, year: i32) -> FinanceResult<Vec<BudgetStatus>> {
        let range = DateRange::month(month, year)?;
        let rows = self.store.fetch_budgets(month, year)?;
        let spend = self.spend_by_category(range)?;

        debug!(
            "Evaluating {} budgets for {}/{} against {} spending categories",
            rows.len(),
            month,
            year,
            spend.len()
        );

        Ok(evaluate_all(&rows, &spend))
    }

    /// Expense totals per category id; expenses without a category are left out
    pub fn spend_by_category(&self, range: DateRange) -> FinanceResult<HashMap<CategoryId, Money>> {
        let mut spend: HashMap<CategoryId, Money> = HashMap::new();
        for expense in self.store.fetch_expenses(range)? {
            if let Some(category_id) = expense.expense.category_id {
                *spend.entry(category_id).or_default() += expense.amount();
            }
        }
        Ok(spend)
    }

    /// Set the budget for a category and month, replacing any existing amount
    pub fn upsert_budget(
        &self,
        category_id: CategoryId,
        amount: Money,
        month: u32,
        year: i32,
    ) -> FinanceResult<Budget> {
        if !amount.is_valid_entry() {
            return Err(FinanceError::InvalidAmount(format!(
                "Budget amount {} must be between {} and {}",
                amount,
                Money::MIN_ENTRY,
                Money::MAX_ENTRY
            )));
        }
        DateRange::month(month, year)?;

        let budget = Budget::new(category_id, amount, month, year);
        self.store.upsert_budget(budget.clone())?;
        Ok(budget)
    }

    /// Like [`upsert_budget`](Self::upsert_budget), choosing the category by name
    pub fn upsert_budget_by_name(
        &self,
        category_name: &str,
        amount: Money,
        month: u32,
        year: i32,
    ) -> FinanceResult<Budget> {
        let category = CategoryService::new(self.store).resolve(category_name)?;
        self.upsert_budget(category.id, amount, month, year)
    }
}
