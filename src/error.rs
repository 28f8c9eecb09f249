//! Custom error types for finance-dashboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// A single rejected field from the new-transaction form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name (e.g. "amount")
    pub field: &'static str,
    /// Human readable message
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors collected from one form submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for a given field, if that field was rejected
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// The main error type for finance-dashboard operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// New-transaction form rejected one or more fields
    #[error("Invalid transaction: {0}")]
    InvalidForm(FormErrors),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Transaction kind does not match the kind of its category
    #[error("Category '{category}' is {category_kind}, but the transaction is {transaction_kind}")]
    KindMismatch {
        category: String,
        category_kind: String,
        transaction_kind: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Snapshot file errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl FinanceError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidForm(_) | Self::KindMismatch { .. }
        )
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

impl From<FormErrors> for FinanceError {
    fn from(errors: FormErrors) -> Self {
        Self::InvalidForm(errors)
    }
}

/// Result type alias for finance-dashboard operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FinanceError::category_not_found("42");
        assert_eq!(err.to_string(), "Category not found: 42");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_kind_mismatch_error() {
        let err = FinanceError::KindMismatch {
            category: "Salary".into(),
            category_kind: "income".into(),
            transaction_kind: "expense".into(),
        };
        assert_eq!(
            err.to_string(),
            "Category 'Salary' is income, but the transaction is expense"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_form_errors_display() {
        let mut errors = FormErrors::default();
        errors.push("amount", "Amount is required");
        errors.push("date", "Date is required");

        assert_eq!(errors.for_field("date"), Some("Date is required"));
        assert_eq!(errors.for_field("description"), None);

        let err: FinanceError = errors.into();
        assert_eq!(
            err.to_string(),
            "Invalid transaction: amount: Amount is required; date: Date is required"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
    }
}
