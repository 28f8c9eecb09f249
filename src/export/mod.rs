//! Export module for finance-dashboard
//!
//! Exports the dashboard report in multiple formats:
//! - CSV: one section per report table, plus a flat transaction list
//! - JSON: machine-readable report with schema version and metadata
//! - YAML: the same structure as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_dashboard_csv, export_transactions_csv};
pub use json::{export_dashboard_json, import_from_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_dashboard_yaml, import_from_yaml};
