//! Ledger snapshot files
//!
//! A snapshot file holds the categories and transactions a session starts
//! from:
//!
//! ```json
//! { "categories": [...], "transactions": [...] }
//! ```
//!
//! Files are only ever read at startup. Transactions added during a session
//! live in memory and are gone when the process exits.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::file_io::read_json_required;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Ledger, Transaction};

/// On-disk form of a ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl LedgerSnapshot {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            categories: ledger.categories().to_vec(),
            transactions: ledger.transactions().to_vec(),
        }
    }

    /// Validate and build a ledger at version 0
    pub fn into_ledger(self) -> FinanceResult<Ledger> {
        for txn in &self.transactions {
            txn.validate().map_err(|e| {
                FinanceError::Snapshot(format!("Transaction {}: {}", txn.id, e))
            })?;
        }
        Ledger::from_parts(self.categories, self.transactions)
    }
}

/// Load a ledger from a snapshot file
pub fn load_ledger<P: AsRef<Path>>(path: P) -> FinanceResult<Ledger> {
    let path = path.as_ref();
    let snapshot: LedgerSnapshot = read_json_required(path)?;

    let ledger = snapshot.into_ledger()?;
    tracing::info!(
        path = %path.display(),
        categories = ledger.categories().len(),
        transactions = ledger.len(),
        "loaded ledger snapshot"
    );
    Ok(ledger)
}

/// Load from `path` if given, otherwise start from the demo data
pub fn load_or_demo(path: Option<&Path>) -> FinanceResult<Ledger> {
    match path {
        Some(path) => load_ledger(path),
        None => {
            tracing::debug!("no data file configured, using demo ledger");
            Ok(Ledger::demo())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, TransactionId};
    use std::fs;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "categories": [
            {"id": 1, "name": "Food", "kind": "expense"},
            {"id": 3, "name": "Salary", "kind": "income"}
        ],
        "transactions": [
            {"id": 1, "amount": 100000, "kind": "income", "category_id": 3,
             "description": "Salary", "date": "2024-01-15"},
            {"id": 2, "amount": 30000, "kind": "expense", "category_id": 1,
             "description": "Groceries", "date": "2024-01-16"}
        ]
    }"#;

    fn write(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("ledger.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, SNAPSHOT);

        let ledger = load_ledger(&path).unwrap();
        assert_eq!(ledger.version(), 0);
        assert_eq!(ledger.categories().len(), 2);
        assert_eq!(ledger.len(), 2);
        let salary = ledger.transaction(TransactionId::new(1)).unwrap();
        assert_eq!(salary.amount, Money::from_units(1000));
        assert_eq!(salary.category_id, CategoryId::new(3));
    }

    #[test]
    fn test_rejects_duplicate_transaction_ids() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, &SNAPSHOT.replace("\"id\": 2,", "\"id\": 1,"));

        let err = load_ledger(&path).unwrap_err();
        assert!(matches!(err, FinanceError::Duplicate { .. }));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, &SNAPSHOT.replace("30000", "-5"));

        let err = load_ledger(&path).unwrap_err();
        assert!(matches!(err, FinanceError::Snapshot(_)));
    }

    #[test]
    fn test_rejects_amount_above_maximum() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, &SNAPSHOT.replace("30000", "9223372036854775807"));

        let err = load_ledger(&path).unwrap_err();
        assert!(matches!(err, FinanceError::Snapshot(ref msg) if msg.contains("exceeds the maximum")));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "{}");

        let ledger = load_ledger(&path).unwrap();
        assert!(ledger.is_empty());
        assert!(ledger.categories().is_empty());
    }

    #[test]
    fn test_load_or_demo() {
        let ledger = load_or_demo(None).unwrap();
        assert_eq!(ledger, Ledger::demo());
    }

    #[test]
    fn test_snapshot_round_trip_through_ledger() {
        let demo = Ledger::demo();
        let snapshot = LedgerSnapshot::from_ledger(&demo);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: LedgerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_ledger().unwrap(), demo);
    }
}
