//! Dashboard report
//!
//! Bundles every aggregate the dashboard shows for one ledger snapshot:
//! summary totals, the expense breakdown, the monthly series and the recent
//! transactions.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::categories::CategoryBreakdown;
use super::monthly::MonthlySeries;
use super::recent::{RecentTransactions, DEFAULT_FALLBACK_LABEL, DEFAULT_RECENT_LIMIT};
use super::totals::Totals;
use crate::config::{Locale, Settings};
use crate::error::{FinanceError, FinanceResult};
use crate::models::Ledger;

/// Knobs for report generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub locale: Locale,
    pub recent_limit: usize,
    pub fallback_label: String,
    /// Restrict the monthly series to one calendar year
    pub year: Option<i32>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            fallback_label: DEFAULT_FALLBACK_LABEL.to_string(),
            year: None,
        }
    }
}

impl ReportOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            locale: settings.locale,
            recent_limit: settings.recent_limit,
            fallback_label: settings.fallback_category_label.clone(),
            year: None,
        }
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Version of the ledger snapshot the report was computed from
    pub ledger_version: u64,
    pub transaction_count: usize,
    pub totals: Totals,
    pub categories: CategoryBreakdown,
    pub monthly: MonthlySeries,
    pub recent: RecentTransactions,
}

impl DashboardReport {
    /// Compute the report; never fails
    pub fn generate(ledger: &Ledger, options: &ReportOptions) -> Self {
        let transactions = ledger.transactions();
        let categories = ledger.categories();

        let monthly = match options.year {
            Some(year) => MonthlySeries::compute_for_year(transactions, year, options.locale),
            None => MonthlySeries::compute(transactions, options.locale),
        };

        let report = Self {
            ledger_version: ledger.version(),
            transaction_count: transactions.len(),
            totals: Totals::compute(transactions),
            categories: CategoryBreakdown::compute(transactions, categories),
            monthly,
            recent: RecentTransactions::compute(
                transactions,
                categories,
                options.recent_limit,
                &options.fallback_label,
            ),
        };

        tracing::debug!(
            version = report.ledger_version,
            transactions = report.transaction_count,
            slices = report.categories.len(),
            "generated dashboard report"
        );

        report
    }

    /// Export the report as CSV, one section per table
    ///
    /// Amounts are written as plain decimals ("1234.56").
    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let mut csv = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);

        let mut write = |record: &[&str]| -> FinanceResult<()> {
            csv.write_record(record)
                .map_err(|e| FinanceError::Export(e.to_string()))
        };

        write(&["Section", "Key", "Income", "Expense", "Balance"])?;
        write(&[
            "summary",
            "total",
            &self.totals.income.to_decimal_string(),
            &self.totals.expense.to_decimal_string(),
            &self.totals.balance.to_decimal_string(),
        ])?;

        for bucket in &self.monthly.buckets {
            write(&[
                "monthly",
                &bucket.label,
                &bucket.income.to_decimal_string(),
                &bucket.expense.to_decimal_string(),
                &bucket.net().to_decimal_string(),
            ])?;
        }

        write(&["Section", "Category", "Total", "Count", "Percentage"])?;
        for entry in &self.categories.entries {
            write(&[
                "category",
                &entry.name,
                &entry.total.to_decimal_string(),
                &entry.transaction_count.to_string(),
                &format!("{:.2}", entry.percentage),
            ])?;
        }

        write(&[
            "Section",
            "Id",
            "Date",
            "Description",
            "Category",
            "Kind",
            "Amount",
        ])?;
        for entry in &self.recent.entries {
            let txn = &entry.transaction;
            write(&[
                "recent",
                &txn.id.to_string(),
                &txn.date.format("%Y-%m-%d").to_string(),
                &txn.description,
                &entry.category_label,
                txn.kind.as_str(),
                &txn.amount.to_decimal_string(),
            ])?;
        }

        csv.flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}
