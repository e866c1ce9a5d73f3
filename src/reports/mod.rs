//! Reports
//!
//! Aggregation primitives and the period financial report built on them.

pub mod aggregate;
pub mod financial;

pub use aggregate::{
    daily_series, expenses_by_category, group_by_key, income_by_source, net_balance, top_key,
    total_amount, Grouping, LedgerEntry,
};
pub use financial::{CategoryShare, FinancialReport, SourceTotal};
