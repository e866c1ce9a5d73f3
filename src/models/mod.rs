//! Core data models
//!
//! Income and expense records, categories, monthly budgets, and the date
//! ranges every aggregation is scoped by.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetKey, BudgetRow, BudgetStatus, BudgetTier};
pub use category::{Category, CategoryRef, DEFAULT_CATEGORIES, DEFAULT_CATEGORY_COLOR};
pub use ids::{CategoryId, ExpenseId, IncomeId};
pub use money::{Money, MoneyParseError};
pub use period::{DateRange, ReportPeriod};
pub use transaction::{
    CategorizedExpense, Expense, Income, Transaction, TransactionKind, UNKNOWN_CATEGORY,
};
