//! Category model
//!
//! Categories are static reference data for a session. Each one is tagged
//! income or expense, and transactions are expected to match that tag.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::kind::TransactionKind;

/// A named classification bucket for transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Whether this category collects income or expenses
    pub kind: TransactionKind,
}

impl Category {
    /// Create a new category
    pub fn new(id: u32, name: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            kind,
        }
    }

    pub fn income(id: u32, name: impl Into<String>) -> Self {
        Self::new(id, name, TransactionKind::Income)
    }

    pub fn expense(id: u32, name: impl Into<String>) -> Self {
        Self::new(id, name, TransactionKind::Expense)
    }

    /// Validate the category
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

/// Validation errors for categories
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
