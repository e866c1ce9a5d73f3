//! Monthly category budgets and their utilization status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Spending limit for one category in one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub category_id: CategoryId,
    pub amount: Money,

    /// Calendar month, 1-12
    pub month: u32,
    pub year: i32,

    pub updated_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(category_id: CategoryId, amount: Money, month: u32, year: i32) -> Self {
        Self {
            category_id,
            amount,
            month,
            year,
            updated_at: Utc::now(),
        }
    }

    /// The (category, month, year) identity of this budget
    pub fn key(&self) -> BudgetKey {
        BudgetKey {
            category_id: self.category_id,
            month: self.month,
            year: self.year,
        }
    }
}

/// Composite key; at most one budget exists per key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BudgetKey {
    pub category_id: CategoryId,
    pub month: u32,
    pub year: i32,
}

/// A budget joined with its category's display details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRow {
    pub budget: Budget,
    pub category_name: String,
    pub category_color: String,
}

/// Utilization classification
///
/// `OnTrack` up to and including 80% used, `Warning` above 80% up to and
/// including 100%, `Over` beyond 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    OnTrack,
    Warning,
    Over,
}

impl BudgetTier {
    pub const WARNING_THRESHOLD: f64 = 80.0;
    pub const OVER_THRESHOLD: f64 = 100.0;

    pub fn from_percent(percent_used: f64) -> Self {
        if percent_used <= Self::WARNING_THRESHOLD {
            Self::OnTrack
        } else if percent_used <= Self::OVER_THRESHOLD {
            Self::Warning
        } else {
            Self::Over
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "on-track"),
            Self::Warning => write!(f, "warning"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// Budget amount against actual spend for one category and month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_color: String,
    pub month: u32,
    pub year: i32,
    pub budget_amount: Money,
    pub spent_amount: Money,

    /// Negative when overspent
    pub remaining: Money,

    /// 0 when the budget amount is not positive
    pub percent_used: f64,

    pub tier: BudgetTier,
}

impl BudgetStatus {
    /// Compute the status of `row` given what was spent in its month
    pub fn compute(row: &BudgetRow, spent: Money) -> Self {
        let budget_amount = row.budget.amount;
        let percent_used = spent.percent_of(budget_amount);

        Self {
            category_id: row.budget.category_id,
            category_name: row.category_name.clone(),
            category_color: row.category_color.clone(),
            month: row.budget.month,
            year: row.budget.year,
            budget_amount,
            spent_amount: spent,
            remaining: budget_amount - spent,
            percent_used,
            tier: BudgetTier::from_percent(percent_used),
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} ({:.1}% used, {})",
            self.category_name, self.spent_amount, self.budget_amount, self.percent_used, self.tier
        )
    }
}
