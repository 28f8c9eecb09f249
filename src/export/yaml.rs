//! YAML export of the dashboard report

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::DashboardExport;
use crate::models::Ledger;
use crate::reports::ReportOptions;

/// Export the dashboard report to YAML, with a short comment header
pub fn export_dashboard_yaml<W: Write>(
    ledger: &Ledger,
    options: &ReportOptions,
    writer: &mut W,
) -> FinanceResult<()> {
    let export = DashboardExport::from_ledger(ledger, options);
    let io_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# Finance Dashboard Export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> FinanceResult<DashboardExport> {
    let export: DashboardExport =
        serde_yaml::from_str(yaml_str).map_err(|e| FinanceError::Export(e.to_string()))?;

    export.validate().map_err(FinanceError::Export)?;

    Ok(export)
}
