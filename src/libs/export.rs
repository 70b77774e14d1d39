//! Data export functionality for external analysis and backup.
//!
//! Exports the locally stored task and history rows in multiple formats so
//! the data can be inspected outside the tool, archived, or fed into other
//! systems.
//!
//! ## Features
//!
//! - **Export Formats**: CSV, JSON, Excel with header formatting
//! - **Data Types**: Tasks, history, and complete data export
//! - **File Naming**: Timestamp-based default names for uniqueness
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn run() -> anyhow::Result<()> {
//! use habsync::libs::export::{Exporter, ExportFormat, ExportData};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, ExportData::Tasks, None);
//! exporter.export().await?;
//! # Ok(())
//! # }
//! ```

use crate::{
    db::{histories::Histories, tasks::Tasks},
    libs::{messages::Message, task::TaskFilter},
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal spreadsheet compatibility.
    Csv,

    /// Pretty-printed JSON preserving data types and structure.
    Json,

    /// Excel workbook with formatted headers and auto-sized columns.
    Excel,
}

impl ExportFormat {
    /// Returns the file extension conventionally used for this format.
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Enumeration of data types available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Export stored task records with kind and timestamp metadata.
    Tasks,

    /// Export the full per-task history with values and provenance.
    History,

    /// Export everything: tasks and history in one operation.
    ///
    /// JSON produces a single combined document; CSV and Excel produce
    /// one file per data type with descriptive suffixes.
    All,
}

impl ExportData {
    /// Short name used in generated file names.
    fn slug(self) -> &'static str {
        match self {
            ExportData::Tasks => "tasks",
            ExportData::History => "history",
            ExportData::All => "all",
        }
    }
}

/// Serializable structure representing a stored task for export.
///
/// All timestamp fields use string representations for format compatibility;
/// missing timestamps export as empty strings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    /// Remote identifier of the task
    pub id: String,
    /// Human-readable task name
    pub name: String,
    /// Task kind (habit, daily, todo, reward)
    pub kind: String,
    /// Creation timestamp reported by the remote service
    pub created_at: String,
    /// Completion timestamp, empty for uncompleted tasks
    pub completed_at: String,
    /// Time of the last synchronization run that touched this task
    pub last_synced: String,
}

/// Serializable structure representing one history entry for export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportHistory {
    /// Identifier of the owning task
    pub task_id: String,
    /// Name of the owning task, repeated per row for flat-file analysis
    pub task_name: String,
    /// Entry date in YYYY-MM-DD format
    pub date: String,
    /// Numeric value recorded for that date
    pub value: f64,
    /// Provenance of the entry (remote or local)
    pub origin: String,
}

/// Main export handler responsible for orchestrating export operations.
///
/// The Exporter encapsulates the output format, the selected data type, and
/// the destination path, and drives the pipeline from database reads to file
/// generation.
pub struct Exporter {
    /// The desired output format for the export operation
    format: ExportFormat,
    /// The category of data to export
    data: ExportData,
    /// The destination path for the exported file
    output_path: PathBuf,
}

impl Exporter {
    /// Creates a new Exporter with the given format, data type, and optional path.
    ///
    /// When no output path is specified, a default filename is generated as
    /// `habsync_<data>_<timestamp>.<ext>`, for example
    /// `habsync_tasks_20250115_143022.csv`.
    pub fn new(format: ExportFormat, data: ExportData, output_path: Option<PathBuf>) -> Self {
        // Timestamped default name so repeated exports never collide
        let default_name = format!("habsync_{}_{}", data.slug(), Local::now().format("%Y%m%d_%H%M%S"));

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, data, output_path }
    }

    /// Main export dispatcher that routes to the handler for the selected data type.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` on successful export completion, or an error if
    /// data gathering or file generation fails.
    pub async fn export(&self) -> Result<()> {
        match self.data {
            ExportData::Tasks => self.export_tasks().await,
            ExportData::History => self.export_history().await,
            ExportData::All => self.export_all().await,
        }
    }

    /// Exports all stored task records in the configured format.
    async fn export_tasks(&self) -> Result<()> {
        let tasks = self.gather_tasks()?;

        match self.format {
            ExportFormat::Csv => self.export_tasks_csv(&tasks)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&tasks)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_tasks_excel(&tasks)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports the complete stored history across all tasks.
    ///
    /// History rows are flattened into one record per task and date so the
    /// output can be consumed as a single table.
    async fn export_history(&self) -> Result<()> {
        let history = self.gather_history()?;

        match self.format {
            ExportFormat::Csv => self.export_history_csv(&history)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&history)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_history_excel(&history)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports tasks and history together.
    ///
    /// JSON combines both data types into a single document with an export
    /// timestamp. CSV and Excel produce separate files with `_tasks` and
    /// `_history` suffixes derived from the configured output path.
    async fn export_all(&self) -> Result<()> {
        msg_info!(Message::ExportingAllData);

        if let ExportFormat::Json = self.format {
            let tasks = self.gather_tasks()?;
            let history = self.gather_history()?;

            let all_data = serde_json::json!({
                "export_date": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                "tasks": tasks,
                "history": history,
            });

            let json = serde_json::to_string_pretty(&all_data)?;
            File::create(&self.output_path)?.write_all(json.as_bytes())?;
        } else {
            let base = self
                .output_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| String::from("habsync_all"));
            let ext = self.format.extension();

            let tasks_path = self.output_path.with_file_name(format!("{}_tasks.{}", base, ext));
            let history_path = self.output_path.with_file_name(format!("{}_history.{}", base, ext));

            let tasks_exporter = Exporter::new(self.format, ExportData::Tasks, Some(tasks_path));
            let history_exporter = Exporter::new(self.format, ExportData::History, Some(history_path));

            tasks_exporter.export_tasks().await?;
            history_exporter.export_history().await?;

            return Ok(());
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Reads all stored tasks and converts them into export rows.
    fn gather_tasks(&self) -> Result<Vec<ExportTask>> {
        let tasks = Tasks::new()?.fetch(TaskFilter::All)?;

        Ok(tasks
            .into_iter()
            .map(|t| ExportTask {
                id: t.id,
                name: t.name,
                kind: t.kind.as_str().to_string(),
                created_at: t.created_at.map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
                completed_at: t.completed_at.map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
                last_synced: t.last_synced.map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
            })
            .collect())
    }

    /// Reads the stored history for every task and flattens it into rows.
    fn gather_history(&self) -> Result<Vec<ExportHistory>> {
        let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
        let mut histories = Histories::new()?;

        let mut rows = Vec::new();
        for task in &tasks {
            for entry in histories.fetch_rows(&task.id)? {
                rows.push(ExportHistory {
                    task_id: task.id.clone(),
                    task_name: task.name.clone(),
                    date: entry.date.format("%Y-%m-%d").to_string(),
                    value: entry.value,
                    origin: entry.origin.as_str().to_string(),
                });
            }
        }

        Ok(rows)
    }

    /// Writes task rows as a CSV table.
    fn export_tasks_csv(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(&["ID", "Name", "Kind", "Created", "Completed", "Last Synced"])?;

        for task in tasks {
            wtr.write_record(&[
                task.id.clone(),
                task.name.clone(),
                task.kind.clone(),
                task.created_at.clone(),
                task.completed_at.clone(),
                task.last_synced.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Writes history rows as a CSV table.
    fn export_history_csv(&self, history: &[ExportHistory]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(&["Task ID", "Task", "Date", "Value", "Origin"])?;

        for entry in history {
            wtr.write_record(&[
                entry.task_id.clone(),
                entry.task_name.clone(),
                entry.date.clone(),
                entry.value.to_string(),
                entry.origin.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Writes task rows to an Excel worksheet with formatted headers.
    fn export_tasks_excel(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Name", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Kind", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Created", &header_format)?;
        worksheet.write_string_with_format(0, 4, "Completed", &header_format)?;
        worksheet.write_string_with_format(0, 5, "Last Synced", &header_format)?;

        for (i, task) in tasks.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &task.id)?;
            worksheet.write_string(row, 1, &task.name)?;
            worksheet.write_string(row, 2, &task.kind)?;
            worksheet.write_string(row, 3, &task.created_at)?;
            worksheet.write_string(row, 4, &task.completed_at)?;
            worksheet.write_string(row, 5, &task.last_synced)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    /// Writes history rows to an Excel worksheet with formatted headers.
    fn export_history_excel(&self, history: &[ExportHistory]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Task ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Task", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Date", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Value", &header_format)?;
        worksheet.write_string_with_format(0, 4, "Origin", &header_format)?;

        for (i, entry) in history.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &entry.task_id)?;
            worksheet.write_string(row, 1, &entry.task_name)?;
            worksheet.write_string(row, 2, &entry.date)?;
            worksheet.write_number(row, 3, entry.value)?;
            worksheet.write_string(row, 4, &entry.origin)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
