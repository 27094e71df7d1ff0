//! Export of the todo list to a file.
//!
//! - **CSV**: one row per todo, for spreadsheets
//! - **JSON**: the todos plus the table-wide totals

use super::reject;
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        query::TodoQuery,
        todo::StatusFilter,
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Status filter: all, active or resolved. Defaults to the configured status.
    #[arg(short, long)]
    status: Option<String>,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file. Defaults to a timestamped name in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, config: &Config) -> Result<()> {
    let filter = match args.status.as_deref() {
        Some(status) => StatusFilter::parse(Some(status)),
        None => config.default_status(),
    };

    let mut query = TodoQuery::new(&config.database)?;
    let todos = query.list(filter).map_err(reject)?;
    if todos.is_empty() {
        msg_bail_anyhow!(Message::NoTodosFound(filter.label().to_string()));
    }
    let totals = query.counts().map_err(reject)?;

    msg_info!(Message::ExportingTodos(todos.len(), args.format.extension().to_string()));

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(&todos, &totals, filter)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
