//! JSON export of the dashboard report
//!
//! Wraps the report with a schema version and export metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Ledger;
use crate::reports::{DashboardReport, ReportOptions};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub metadata: ExportMetadata,

    pub report: DashboardReport,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub category_count: usize,
    pub transaction_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl DashboardExport {
    /// Generate the report for `ledger` and wrap it
    pub fn from_ledger(ledger: &Ledger, options: &ReportOptions) -> Self {
        let transactions = ledger.transactions();

        let metadata = ExportMetadata {
            category_count: ledger.categories().len(),
            transaction_count: transactions.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata,
            report: DashboardReport::generate(ledger, options),
        }
    }

    /// Check the schema version and the report's internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let totals = &self.report.totals;
        if totals.income - totals.expense != totals.balance {
            return Err("Balance does not equal income minus expense".into());
        }

        if self.report.monthly.buckets.len() != 12 {
            return Err(format!(
                "Monthly series has {} buckets, expected 12",
                self.report.monthly.buckets.len()
            ));
        }

        Ok(())
    }
}

/// Export the dashboard report to JSON
pub fn export_dashboard_json<W: Write>(
    ledger: &Ledger,
    options: &ReportOptions,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = DashboardExport::from_ledger(ledger, options);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> FinanceResult<DashboardExport> {
    let export: DashboardExport =
        serde_json::from_str(json_str).map_err(|e| FinanceError::Export(e.to_string()))?;

    export.validate().map_err(FinanceError::Export)?;

    Ok(export)
}
