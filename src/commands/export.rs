//! Data export command for external analysis and backup.
//!
//! Extracts the locally stored tasks and history into CSV, JSON, or Excel
//! files for analysis outside the tool or for backup purposes.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: Comma-separated values for spreadsheet applications
//! - **JSON**: Structured data for programmatic processing
//! - **Excel**: Native spreadsheet format with header formatting
//!
//! ## Data Types
//!
//! - **Tasks**: Stored task records with kind and timestamp metadata
//! - **History**: Per-task history entries with values and provenance
//! - **All**: Complete data export covering both

use crate::{
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Type of data to export
    #[arg(value_enum, default_value = "tasks")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// When omitted, a timestamped filename is generated from the selected
    /// data type and format, e.g. `habsync_tasks_20250115_143022.csv`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Executes the data export command.
pub async fn cmd(args: ExportArgs) -> Result<()> {
    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.data, args.output);
    exporter.export().await?;

    Ok(())
}
