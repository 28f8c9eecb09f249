//! Dashboard CLI command

use clap::Args;

use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::FinanceResult;
use crate::models::Ledger;
use crate::reports::{DashboardReport, ReportOptions};

/// Arguments for the dashboard command
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Only chart months of this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Number of recent transactions to show (default from settings)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl DashboardArgs {
    /// Report options from the settings, overridden by the flags
    pub fn report_options(&self, settings: &Settings) -> ReportOptions {
        let mut options = ReportOptions::from_settings(settings).with_year(self.year);
        if let Some(limit) = self.limit {
            options = options.with_recent_limit(limit);
        }
        options
    }
}

/// Print the dashboard for the session ledger
pub fn handle_dashboard_command(
    ledger: &Ledger,
    settings: &Settings,
    args: &DashboardArgs,
) -> FinanceResult<()> {
    let report = DashboardReport::generate(ledger, &args.report_options(settings));
    print!("{}", format_dashboard(&report, settings));
    Ok(())
}
