//! Expense categories
//!
//! A category is a unique name plus a display color. The color is never
//! interpreted here; it is passed through for whatever renders it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Color given to categories created without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#3498db";

/// Categories seeded on first run
pub const DEFAULT_CATEGORIES: [(&str, &str); 10] = [
    ("Food & Dining", "#e74c3c"),
    ("Transportation", "#f39c12"),
    ("Shopping", "#9b59b6"),
    ("Entertainment", "#e67e22"),
    ("Bills & Utilities", "#34495e"),
    ("Healthcare", "#1abc9c"),
    ("Education", "#3498db"),
    ("Travel", "#2ecc71"),
    ("Personal Care", "#f1c40f"),
    ("Other", "#95a5a6"),
];

/// A spending category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// Unique category name
    pub name: String,

    /// Display hint, e.g. "#e74c3c"
    #[serde(default = "default_color")]
    pub color: String,

    pub created_at: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl Category {
    /// Create a new category with the default color
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_color(name, DEFAULT_CATEGORY_COLOR)
    }

    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
            created_at: Utc::now(),
        }
    }

    /// The ten categories every new data directory starts with
    pub fn defaults() -> Vec<Category> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(name, color)| Category::with_color(*name, *color))
            .collect()
    }

    /// Name and color, as attached to a fetched expense
    pub fn to_ref(&self) -> CategoryRef {
        CategoryRef {
            name: self.name.clone(),
            color: self.color.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Resolved category details carried by a fetched expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
