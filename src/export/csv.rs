//! CSV export
//!
//! The dashboard report as sectioned CSV, and a flat transaction list for
//! spreadsheets.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Ledger;
use crate::reports::{DashboardReport, ReportOptions};

/// Export the dashboard report, one CSV section per table
pub fn export_dashboard_csv<W: Write>(
    ledger: &Ledger,
    options: &ReportOptions,
    writer: &mut W,
) -> FinanceResult<()> {
    DashboardReport::generate(ledger, options).export_csv(writer)
}

/// Export every transaction in insertion order
pub fn export_transactions_csv<W: Write>(
    ledger: &Ledger,
    fallback_label: &str,
    writer: &mut W,
) -> FinanceResult<()> {
    let category_names: HashMap<_, _> = ledger
        .categories()
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Kind", "Category", "Description", "Amount"])
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    for txn in ledger.transactions() {
        let category = category_names
            .get(&txn.category_id)
            .copied()
            .unwrap_or(fallback_label);

        csv.write_record([
            txn.id.to_string().as_str(),
            txn.date.to_string().as_str(),
            txn.kind.as_str(),
            category,
            txn.description.as_str(),
            txn.amount.to_decimal_string().as_str(),
        ])
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}
