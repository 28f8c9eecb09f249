//! Ledger snapshot
//!
//! A `Ledger` is an immutable, versioned pair of the session's category list
//! and its transaction list. Appending a transaction produces a new snapshot;
//! any snapshot already handed out keeps seeing exactly what it saw before.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use super::category::Category;
use super::ids::{CategoryId, TransactionId};
use super::kind::TransactionKind;
use super::money::Money;
use super::transaction::Transaction;
use crate::error::{FinanceError, FinanceResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    version: u64,
    categories: Arc<[Category]>,
    transactions: Arc<[Transaction]>,
}

impl Ledger {
    /// Create an empty ledger over a fixed set of categories
    pub fn new(categories: Vec<Category>) -> FinanceResult<Self> {
        Self::from_parts(categories, Vec::new())
    }

    /// Build a ledger from already-recorded data
    ///
    /// Category ids and transaction ids must be unique. Transactions may
    /// reference categories that do not exist.
    pub fn from_parts(
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
    ) -> FinanceResult<Self> {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            category
                .validate()
                .map_err(|e| FinanceError::Validation(e.to_string()))?;
            if !seen_categories.insert(category.id) {
                return Err(FinanceError::Duplicate {
                    entity_type: "Category",
                    identifier: category.id.to_string(),
                });
            }
        }

        let mut seen_transactions = HashSet::new();
        for txn in &transactions {
            if !seen_transactions.insert(txn.id) {
                return Err(FinanceError::Duplicate {
                    entity_type: "Transaction",
                    identifier: txn.id.to_string(),
                });
            }
        }

        Ok(Self {
            version: 0,
            categories: categories.into(),
            transactions: transactions.into(),
        })
    }

    /// The sample data the application starts with when no file is given
    pub fn demo() -> Self {
        let categories = vec![
            Category::expense(1, "Alimentação"),
            Category::expense(2, "Transporte"),
            Category::income(3, "Salário"),
            Category::income(4, "Investimentos"),
            Category::expense(5, "Lazer"),
            Category::expense(6, "Saúde"),
        ];

        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or(NaiveDate::MIN);
        let transactions = vec![
            Transaction::new(
                TransactionId::new(1),
                Money::from_units(5000),
                TransactionKind::Income,
                CategoryId::new(3),
                "Salário",
                day(15),
            ),
            Transaction::new(
                TransactionId::new(2),
                Money::from_units(300),
                TransactionKind::Expense,
                CategoryId::new(1),
                "Supermercado",
                day(16),
            ),
            Transaction::new(
                TransactionId::new(3),
                Money::from_units(150),
                TransactionKind::Expense,
                CategoryId::new(2),
                "Combustível",
                day(17),
            ),
        ];

        Self {
            version: 0,
            categories: categories.into(),
            transactions: transactions.into(),
        }
    }

    /// Number of mutations since this ledger was built
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Highest transaction id in the ledger
    pub fn max_transaction_id(&self) -> Option<TransactionId> {
        self.transactions.iter().map(|t| t.id).max()
    }

    /// Return a new snapshot with `transaction` appended
    ///
    /// Fails only if the id is already taken.
    pub fn with_transaction(&self, transaction: Transaction) -> FinanceResult<Self> {
        if self.transaction(transaction.id).is_some() {
            return Err(FinanceError::Duplicate {
                entity_type: "Transaction",
                identifier: transaction.id.to_string(),
            });
        }

        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.extend_from_slice(&self.transactions);
        transactions.push(transaction);

        Ok(Self {
            version: self.version + 1,
            categories: Arc::clone(&self.categories),
            transactions: transactions.into(),
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            version: 0,
            categories: Arc::from(Vec::<Category>::new()),
            transactions: Arc::from(Vec::<Transaction>::new()),
        }
    }
}
