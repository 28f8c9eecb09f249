//! Storage layer for finance-dashboard
//!
//! JSON file helpers with atomic writes, and read-only loading of ledger
//! snapshot files.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json_required, write_atomic, write_json_atomic};
pub use snapshot::{load_ledger, load_or_demo, LedgerSnapshot};
