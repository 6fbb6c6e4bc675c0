//! Task export for backup and external analysis.
//!
//! Writes every stored task to CSV or JSON. Dates are ISO-formatted and the
//! stored `pending_days` is accompanied by its deadline label, so exported
//! rows read the same way the list view does. Default file names carry
//! today's date; an explicit output path wins over the default.

use crate::libs::deadline::deadline_label;
use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and simple tooling.
    Csv,
    /// Pretty-printed JSON for programmatic consumption.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported task row. All date fields are pre-formatted strings so both
/// formats serialize identically.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub tags: String,
    pub priority: String,
    pub due_date: String,
    pub created_date: String,
    pub pending_days: i64,
    pub deadline: String,
    pub information: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            name: task.name.clone(),
            status: task.status.clone(),
            tags: task.tags.clone(),
            priority: task.priority.clone(),
            due_date: task.due_date.to_string(),
            created_date: task.created_date.to_string(),
            pending_days: task.pending_days,
            deadline: deadline_label(task.pending_days),
            information: task.information.clone(),
        }
    }
}

/// Writes task data to a file in the requested format.
pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports `tasks` and returns the path written.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let path = self.output.clone().unwrap_or_else(|| self.default_path());
        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => Self::write_csv(&path, &rows)?,
            ExportFormat::Json => Self::write_json(&path, &rows)?,
        }

        Ok(path)
    }

    fn default_path(&self) -> PathBuf {
        let date = Local::now().date_naive();
        PathBuf::from(format!("tasks_{}.{}", date, self.format.extension()))
    }

    fn write_csv(path: &PathBuf, rows: &[ExportTask]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(path: &PathBuf, rows: &[ExportTask]) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, rows)?;
        Ok(())
    }
}
