//! Service layer
//!
//! Business logic on top of the transaction store: budget evaluation, the
//! dashboard, transaction entry, and category lookup.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod transaction;

pub use budget::{evaluate_all, BudgetService};
pub use category::CategoryService;
pub use dashboard::{DashboardService, DashboardStats, MonthlySummary, RecentTransaction};
pub use transaction::TransactionService;
