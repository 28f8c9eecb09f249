//! Service layer for finance-dashboard
//!
//! Services sit on top of a ledger snapshot and handle lookups, validation
//! and the creation of new transactions.

pub mod category;
pub mod transaction;

pub use category::CategoryService;
pub use transaction::{CreateTransactionInput, TransactionForm, TransactionService};
