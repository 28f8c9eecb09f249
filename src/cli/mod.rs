//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod dashboard;
pub mod export;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use transaction::{handle_transaction_command, TransactionCommands};
