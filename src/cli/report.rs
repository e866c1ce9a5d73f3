//! CLI command for the period financial report

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::reports::FinancialReport;
use crate::storage::TransactionStore;

/// Report arguments
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report period: "Last 7 days", "Last 30 days", "Last 3 months", "Last year"
    /// (or 7d, 30d, 90d, 365d). Defaults to the configured period.
    pub period: Option<String>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the report command
pub fn handle_report_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    today: NaiveDate,
    args: ReportArgs,
) -> FinanceResult<()> {
    let period = args
        .period
        .as_deref()
        .unwrap_or(&settings.default_report_period);
    let report = FinancialReport::generate_named(store, period, today)?;

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            FinanceError::Io(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Report exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
