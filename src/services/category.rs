//! Category service
//!
//! Read-only lookups over the categories of a ledger snapshot.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, CategoryId, Ledger, TransactionKind};

/// Service for category lookups
pub struct CategoryService<'a> {
    ledger: &'a Ledger,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// All categories in definition order
    pub fn list(&self) -> &'a [Category] {
        self.ledger.categories()
    }

    /// Categories of one kind, used to offer choices for a new transaction
    pub fn list_by_kind(&self, kind: TransactionKind) -> Vec<&'a Category> {
        self.ledger
            .categories()
            .iter()
            .filter(|c| c.kind == kind)
            .collect()
    }

    pub fn get(&self, id: CategoryId) -> Option<&'a Category> {
        self.ledger.category(id)
    }

    /// Find a category by ID string or name (case-insensitive)
    pub fn find(&self, identifier: &str) -> Option<&'a Category> {
        if let Ok(id) = identifier.trim().parse::<CategoryId>() {
            if let Some(category) = self.get(id) {
                return Some(category);
            }
        }

        let needle = identifier.trim().to_lowercase();
        self.ledger
            .categories()
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
    }

    /// Like `get`, but a missing category is an error
    pub fn require(&self, id: CategoryId) -> FinanceResult<&'a Category> {
        self.get(id)
            .ok_or_else(|| FinanceError::category_not_found(id.to_string()))
    }

    /// Display label for a category id, or `fallback` if it does not resolve
    pub fn label_for(&self, id: CategoryId, fallback: &'a str) -> &'a str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or(fallback)
    }
}
