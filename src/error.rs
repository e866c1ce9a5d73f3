//! Error types for the finance tracker
//!
//! Aggregation never fails; errors only come from input validation and the
//! transaction store.

use thiserror::Error;

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Zero, negative, out-of-range or unparseable amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Expense references a category name that is not in the category set
    #[error("Category not found: {0}")]
    MissingCategory(String),

    /// Report period name that does not map to a known window
    #[error("Unknown report period: {0}")]
    UnknownPeriod(String),

    /// The transaction store could not be read or written
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Missing required field or malformed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl FinanceError {
    /// Check if this is an amount rejection
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a store failure
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<crate::models::MoneyParseError> for FinanceError {
    fn from(err: crate::models::MoneyParseError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::InvalidAmount("0.00".into());
        assert_eq!(err.to_string(), "Invalid amount: 0.00");
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_missing_category_display() {
        let err = FinanceError::MissingCategory("Groceries".into());
        assert_eq!(err.to_string(), "Category not found: Groceries");
    }

    #[test]
    fn test_duplicate_display() {
        let err = FinanceError::Duplicate {
            entity_type: "Category",
            identifier: "Travel".into(),
        };
        assert_eq!(err.to_string(), "Category already exists: Travel");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
    }
}
