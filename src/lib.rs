//! Finance Tracker - personal income, expense and budget tracking
//!
//! This library turns raw income and expense records into dashboard
//! statistics, daily trend series, category breakdowns, and monthly budget
//! status.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories, budgets, periods)
//! - `storage`: The transaction store interface and its JSON file implementation
//! - `reports`: Aggregation and the period financial report
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `finance` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::paths::FinancePaths;
//! use finance_tracker::services::DashboardService;
//! use finance_tracker::storage::JsonStore;
//!
//! let store = JsonStore::new(FinancePaths::new()?)?;
//! let today = chrono::Local::now().date_naive();
//! let stats = DashboardService::new(&store).dashboard(today)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
