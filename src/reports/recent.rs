//! Recent transactions view
//!
//! The last N transactions in insertion order, newest first. Entries are not
//! sorted by date: a transaction recorded late with an old date still shows
//! up at the top.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryId, Transaction};

/// Default number of rows in the recent view
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Placeholder used when a category id does not resolve
pub const DEFAULT_FALLBACK_LABEL: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub transaction: Transaction,
    /// Category name, or the fallback label if the category is unknown
    pub category_label: String,
    /// Whether the category id resolved
    pub category_found: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecentTransactions {
    pub entries: Vec<RecentEntry>,
}

impl RecentTransactions {
    /// Take the last `limit` transactions and reverse them
    pub fn compute(
        transactions: &[Transaction],
        categories: &[Category],
        limit: usize,
        fallback_label: &str,
    ) -> Self {
        let names: HashMap<CategoryId, &str> = categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let start = transactions.len().saturating_sub(limit);
        let entries = transactions[start..]
            .iter()
            .rev()
            .map(|txn| {
                let name = names.get(&txn.category_id).copied();
                RecentEntry {
                    transaction: txn.clone(),
                    category_label: name.unwrap_or(fallback_label).to_string(),
                    category_found: name.is_some(),
                }
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecentEntry> {
        self.entries.iter()
    }
}
