//! Export of todo lists to files for backup or external analysis.
//!
//! - **CSV**: one row per todo, for spreadsheets
//! - **JSON**: the todos plus the table-wide totals
//!
//! Without an explicit output path the file is named
//! `todo_suite_export_YYYYMMDD_HHMMSS.<ext>` in the current directory.

use super::form::DATE_FORMAT;
use super::todo::{format_timestamp, StatusFilter, Todo, Totals};
use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    exported_at: String,
    status: &'a str,
    totals: &'a Totals,
    todos: &'a [Todo],
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("todo_suite_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `todos` in the configured format and returns the file path.
    pub fn export(&self, todos: &[Todo], totals: &Totals, status: StatusFilter) -> Result<&Path> {
        match self.format {
            ExportFormat::Csv => self.export_csv(todos)?,
            ExportFormat::Json => self.export_json(todos, totals, status)?,
        }
        tracing::debug!(path = %self.output_path.display(), count = todos.len(), "export written");
        Ok(&self.output_path)
    }

    fn export_csv(&self, todos: &[Todo]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Title", "Notes", "Due date", "Priority", "Resolved", "Owner", "Created", "Updated"])?;

        for todo in todos {
            wtr.write_record(&[
                todo.id.to_string(),
                todo.title.clone(),
                todo.notes.clone(),
                todo.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
                todo.priority.to_string(),
                todo.is_resolved.to_string(),
                todo.owner_id.map(|id| id.to_string()).unwrap_or_default(),
                format_timestamp(&todo.created_at),
                format_timestamp(&todo.updated_at),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, todos: &[Todo], totals: &Totals, status: StatusFilter) -> Result<()> {
        let document = ExportDocument {
            exported_at: Local::now().to_rfc3339(),
            status: status.as_str(),
            totals,
            todos,
        };
        let json = serde_json::to_string_pretty(&document)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
