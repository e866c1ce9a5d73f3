//! Income and expense records
//!
//! Both kinds are immutable once stored. An expense keeps only the id of its
//! category; when fetched from the store it is paired with the resolved name
//! and color, or with nothing if the category has since been deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryRef;
use super::ids::{CategoryId, ExpenseId, IncomeId};
use super::money::Money;
use crate::error::FinanceError;

/// Bucket name for expenses whose category no longer exists
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Longest description accepted, in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A recorded income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub amount: Money,
    pub date: NaiveDate,

    /// Free-text origin, e.g. "Salary"
    pub source: String,

    #[serde(default)]
    pub description: String,

    pub created_at: DateTime<Utc>,
}

impl Income {
    pub fn new(
        amount: Money,
        source: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            amount,
            date,
            source: source.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_amount(self.amount)?;
        if self.source.trim().is_empty() {
            return Err(TransactionValidationError::EmptySource);
        }
        validate_description(&self.description)
    }
}

/// A recorded expense, as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Money,
    pub date: NaiveDate,

    /// `None` once the referenced category has been deleted
    pub category_id: Option<CategoryId>,

    pub description: String,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        amount: Money,
        category_id: Option<CategoryId>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            category_id,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_amount(self.amount)?;
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        validate_description(&self.description)
    }
}

/// An expense together with its resolved category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizedExpense {
    #[serde(flatten)]
    pub expense: Expense,
    pub category: Option<CategoryRef>,
}

impl CategorizedExpense {
    pub fn new(expense: Expense, category: Option<CategoryRef>) -> Self {
        Self { expense, category }
    }

    /// Category name used for grouping; orphans land in [`UNKNOWN_CATEGORY`]
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn amount(&self) -> Money {
        self.expense.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.expense.date
    }
}

/// Kind of a transaction in a merged feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Either an income or a categorized expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transaction {
    Income(Income),
    Expense(CategorizedExpense),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Income(_) => TransactionKind::Income,
            Self::Expense(_) => TransactionKind::Expense,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Income(income) => income.amount,
            Self::Expense(expense) => expense.amount(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Income(income) => income.date,
            Self::Expense(expense) => expense.date(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Income(income) => &income.description,
            Self::Expense(expense) => &expense.expense.description,
        }
    }

    /// Income source or expense category name
    pub fn label(&self) -> &str {
        match self {
            Self::Income(income) => &income.source,
            Self::Expense(expense) => expense.category_name(),
        }
    }

    /// Amount with a direction sign: "+$10.00" for income, "-$10.00" for expenses
    pub fn signed_amount(&self, symbol: &str) -> String {
        let sign = match self.kind() {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        format!("{}{}", sign, self.amount().format_with_symbol(symbol))
    }
}

impl From<Income> for Transaction {
    fn from(income: Income) -> Self {
        Self::Income(income)
    }
}

impl From<CategorizedExpense> for Transaction {
    fn from(expense: CategorizedExpense) -> Self {
        Self::Expense(expense)
    }
}

fn validate_amount(amount: Money) -> Result<(), TransactionValidationError> {
    if amount.is_valid_entry() {
        Ok(())
    } else {
        Err(TransactionValidationError::InvalidAmount(amount))
    }
}

fn validate_description(description: &str) -> Result<(), TransactionValidationError> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(TransactionValidationError::DescriptionTooLong(len));
    }
    Ok(())
}

/// Validation errors for income and expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    InvalidAmount(Money),
    DescriptionTooLong(usize),
    EmptySource,
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(amount) => write!(
                f,
                "Amount {} must be between {} and {}",
                amount,
                Money::MIN_ENTRY,
                Money::MAX_ENTRY
            ),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description too long ({} chars, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
            Self::EmptySource => write!(f, "Income source is required"),
            Self::EmptyDescription => write!(f, "Expense description is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

impl From<TransactionValidationError> for FinanceError {
    fn from(err: TransactionValidationError) -> Self {
        match err {
            TransactionValidationError::InvalidAmount(_) => Self::InvalidAmount(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_orphan_expense_is_unknown() {
        let expense = Expense::new(Money::from_cents(500), None, "Mystery", date(2025, 1, 3));
        let categorized = CategorizedExpense::new(expense, None);
        assert_eq!(categorized.category_name(), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_categorized_expense_name() {
        let expense = Expense::new(Money::from_cents(500), None, "Lunch", date(2025, 1, 3));
        let categorized = CategorizedExpense::new(
            expense,
            Some(CategoryRef {
                name: "Food & Dining".into(),
                color: "#e74c3c".into(),
            }),
        );
        assert_eq!(categorized.category_name(), "Food & Dining");
    }

    #[test]
    fn test_income_validation() {
        let ok = Income::new(Money::from_cents(50000), "Salary", date(2025, 1, 1), "");
        assert!(ok.validate().is_ok());

        let zero = Income::new(Money::zero(), "Salary", date(2025, 1, 1), "");
        assert!(matches!(
            zero.validate(),
            Err(TransactionValidationError::InvalidAmount(_))
        ));

        let no_source = Income::new(Money::from_cents(100), "  ", date(2025, 1, 1), "");
        assert_eq!(
            no_source.validate(),
            Err(TransactionValidationError::EmptySource)
        );
    }

    #[test]
    fn test_expense_validation() {
        let too_long = Expense::new(
            Money::from_cents(100),
            None,
            "x".repeat(501),
            date(2025, 1, 1),
        );
        assert_eq!(
            too_long.validate(),
            Err(TransactionValidationError::DescriptionTooLong(501))
        );

        let empty = Expense::new(Money::from_cents(100), None, "", date(2025, 1, 1));
        assert_eq!(
            empty.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );

        let negative = Expense::new(Money::from_cents(-100), None, "Refund", date(2025, 1, 1));
        let err: FinanceError = negative.validate().unwrap_err().into();
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_transaction_accessors() {
        let income: Transaction =
            Income::new(Money::from_cents(80000), "Freelance", date(2025, 2, 1), "Site").into();
        assert_eq!(income.kind(), TransactionKind::Income);
        assert_eq!(income.label(), "Freelance");
        assert_eq!(income.signed_amount("$"), "+$800.00");

        let expense: Transaction = CategorizedExpense::new(
            Expense::new(Money::from_cents(1250), None, "Taxi", date(2025, 2, 2)),
            None,
        )
        .into();
        assert_eq!(expense.kind(), TransactionKind::Expense);
        assert_eq!(expense.label(), "Unknown");
        assert_eq!(expense.signed_amount("$"), "-$12.50");
    }
}
