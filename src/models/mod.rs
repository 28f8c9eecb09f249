//! Core data models for finance-dashboard
//!
//! This module contains the data structures of the tracking domain:
//! categories, transactions, money and the ledger snapshot that holds them.

pub mod category;
pub mod ids;
pub mod kind;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use category::{Category, CategoryValidationError};
pub use ids::{CategoryId, TransactionId};
pub use kind::TransactionKind;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
pub use transaction::{NewTransaction, Transaction, TransactionValidationError};
