//! Storage layer
//!
//! [`TransactionStore`] is the query interface the reports and services read
//! through. [`JsonStore`] implements it over JSON files with atomic writes.
//! Nothing is cached between calls: every fetch re-reads the files.

pub mod budget;
pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod income;
pub mod init;

pub use budget::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use income::IncomeRepository;
pub use init::initialize_storage;

use std::collections::HashMap;

use log::{info, warn};

use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;
use crate::models::{
    Budget, BudgetRow, CategorizedExpense, Category, CategoryId, CategoryRef, DateRange, Expense,
    Income,
};

/// Source of income, expense, category, and budget records
pub trait TransactionStore {
    /// Income dated within `range`, newest first
    fn fetch_income(&self, range: DateRange) -> FinanceResult<Vec<Income>>;

    /// Expenses dated within `range`, newest first, each with its resolved
    /// category or `None` if that category no longer exists
    fn fetch_expenses(&self, range: DateRange) -> FinanceResult<Vec<CategorizedExpense>>;

    /// All categories, ascending by name
    fn fetch_categories(&self) -> FinanceResult<Vec<Category>>;

    /// Budgets set for a month, joined with their category details
    fn fetch_budgets(&self, month: u32, year: i32) -> FinanceResult<Vec<BudgetRow>>;

    /// Insert or replace the budget for its (category, month, year)
    fn upsert_budget(&self, budget: Budget) -> FinanceResult<()>;

    fn insert_income(&self, income: Income) -> FinanceResult<()>;

    fn insert_expense(&self, expense: Expense) -> FinanceResult<()>;

    fn insert_category(&self, category: Category) -> FinanceResult<()>;
}

/// JSON file store rooted at a data directory
pub struct JsonStore {
    paths: FinancePaths,
    pub income: IncomeRepository,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
}

impl JsonStore {
    /// Create a store, making sure its directories exist
    pub fn new(paths: FinancePaths) -> FinanceResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            income: IncomeRepository::new(paths.income_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Check if default categories have been written
    pub fn is_initialized(&self) -> bool {
        self.categories.exists()
    }

    fn category_lookup(&self) -> FinanceResult<HashMap<CategoryId, Category>> {
        Ok(self
            .categories
            .get_all()?
            .into_iter()
            .map(|c| (c.id, c))
            .collect())
    }
}

impl TransactionStore for JsonStore {
    fn fetch_income(&self, range: DateRange) -> FinanceResult<Vec<Income>> {
        self.income.get_by_date_range(range)
    }

    fn fetch_expenses(&self, range: DateRange) -> FinanceResult<Vec<CategorizedExpense>> {
        let lookup = self.category_lookup()?;
        let expenses = self.expenses.get_by_date_range(range)?;

        Ok(expenses
            .into_iter()
            .map(|expense| {
                let category: Option<CategoryRef> = expense
                    .category_id
                    .and_then(|id| lookup.get(&id))
                    .map(Category::to_ref);
                CategorizedExpense::new(expense, category)
            })
            .collect())
    }

    fn fetch_categories(&self) -> FinanceResult<Vec<Category>> {
        self.categories.get_all()
    }

    fn fetch_budgets(&self, month: u32, year: i32) -> FinanceResult<Vec<BudgetRow>> {
        let lookup = self.category_lookup()?;
        let budgets = self.budgets.get_for_month(month, year)?;

        let mut rows = Vec::with_capacity(budgets.len());
        for budget in budgets {
            match lookup.get(&budget.category_id) {
                Some(category) => rows.push(BudgetRow {
                    category_name: category.name.clone(),
                    category_color: category.color.clone(),
                    budget,
                }),
                None => warn!(
                    "Skipping budget for deleted category {} ({}/{})",
                    budget.category_id, month, year
                ),
            }
        }
        Ok(rows)
    }

    fn upsert_budget(&self, budget: Budget) -> FinanceResult<()> {
        let key = budget.key();
        let amount = budget.amount;
        let replaced = self.budgets.upsert(budget)?;
        info!(
            "{} budget {} for {} {}/{}",
            if replaced { "Replaced" } else { "Created" },
            amount,
            key.category_id,
            key.month,
            key.year
        );
        Ok(())
    }

    fn insert_income(&self, income: Income) -> FinanceResult<()> {
        info!("Recording income {} from '{}'", income.amount, income.source);
        self.income.insert(income)
    }

    fn insert_expense(&self, expense: Expense) -> FinanceResult<()> {
        info!("Recording expense {} on {}", expense.amount, expense.date);
        self.expenses.insert(expense)
    }

    fn insert_category(&self, category: Category) -> FinanceResult<()> {
        info!("Creating category '{}'", category.name);
        self.categories.insert(category)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers shared by service and report tests

    use super::*;
    use tempfile::TempDir;

    /// A fresh store in a temporary directory, seeded with default categories
    pub fn create_test_store() -> (TempDir, JsonStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();
        let store = JsonStore::new(paths).unwrap();
        (temp_dir, store)
    }

    /// Look up a seeded category by name
    pub fn category_named(store: &JsonStore, name: &str) -> Category {
        store
            .fetch_categories()
            .unwrap()
            .into_iter()
            .find(|c| c.name == name)
            .unwrap()
    }
}
