//! CLI command for exporting the dashboard

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{csv, json, yaml};
use crate::models::Ledger;
use crate::reports::ReportOptions;
use crate::storage::write_atomic;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one section per report table
    Csv,
    /// JSON with schema version and metadata
    Json,
    /// YAML, same structure as JSON
    Yaml,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only include months of this year in the monthly series
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Export the plain transaction list instead of the report (CSV only)
    #[arg(long)]
    pub transactions: bool,
}

/// Render the export into memory
pub fn render_export(ledger: &Ledger, settings: &Settings, args: &ExportArgs) -> FinanceResult<Vec<u8>> {
    let options = ReportOptions::from_settings(settings).with_year(args.year);
    let mut buffer = Vec::new();

    match (args.format, args.transactions) {
        (ExportFormat::Csv, true) => {
            csv::export_transactions_csv(ledger, &settings.fallback_category_label, &mut buffer)?
        }
        (_, true) => {
            return Err(FinanceError::Export(
                "--transactions is only supported with --format csv".into(),
            ))
        }
        (ExportFormat::Csv, false) => csv::export_dashboard_csv(ledger, &options, &mut buffer)?,
        (ExportFormat::Json, false) => {
            json::export_dashboard_json(ledger, &options, &mut buffer, args.pretty)?
        }
        (ExportFormat::Yaml, false) => yaml::export_dashboard_yaml(ledger, &options, &mut buffer)?,
    }

    Ok(buffer)
}

/// Handle the export command
pub fn handle_export_command(
    ledger: &Ledger,
    settings: &Settings,
    args: &ExportArgs,
) -> FinanceResult<()> {
    let contents = render_export(ledger, settings, args)?;

    match &args.output {
        Some(path) => {
            write_atomic(path, &contents)?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "wrote export");
            eprintln!("Exported {:?} to: {}", args.format, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&contents)?;
            if !contents.ends_with(b"\n") {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}
