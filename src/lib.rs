//! finance-dashboard - Personal income and expense dashboard
//!
//! This library records income and expense transactions against a fixed set
//! of categories and derives the figures a finance dashboard shows: summary
//! totals, spending per category, a month-by-month series and the most
//! recent transactions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (money, categories, transactions, ledger)
//! - `storage`: Atomic JSON writes and read-only snapshot loading
//! - `services`: Lookups, form validation and transaction creation
//! - `reports`: The aggregation engine
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust
//! use finance_dashboard::models::Ledger;
//! use finance_dashboard::reports::{DashboardReport, ReportOptions};
//!
//! let report = DashboardReport::generate(&Ledger::demo(), &ReportOptions::default());
//! assert_eq!(report.totals.balance.units(), 4550);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
