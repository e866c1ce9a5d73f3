//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, progress bars, and status indicators.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod report;

pub use budget::format_budget_statuses;
pub use category::format_category_list;
pub use dashboard::{format_dashboard, format_recent, format_trend};
