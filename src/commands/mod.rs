//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! function. [`Cli::menu`] parses the process arguments, loads the
//! configuration once and dispatches; [`Cli::run`] does the dispatch alone so
//! a parsed command can be run against any configuration.
//!
//! ```text
//! todo-suite list [--status active|resolved|all] [--search TEXT]
//! todo-suite show <ID>
//! todo-suite add [TITLE] [--notes ..] [--due YYYY-MM-DD] [--priority N] [--resolved] [--owner ID]
//! todo-suite edit <ID> [--title ..] [--notes ..] [--due ..|--clear-due] [--priority N]
//!                      [--resolved true|false] [--owner ID|--clear-owner]
//! todo-suite delete <ID> [--yes]
//! todo-suite toggle <ID>
//! todo-suite export [--status ..] [--format csv|json] [--output PATH]
//! todo-suite init
//! todo-suite migrations status|history
//! ```

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod migrations;
pub mod show;
pub mod toggle;

use crate::{
    libs::{config::Config, error::TodoError, form, form::TodoForm, messages::Message, todo::Todo},
    msg_error, msg_error_anyhow,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "List todos with totals")]
    List(list::ListArgs),
    #[command(about = "Show a single todo")]
    Show(show::ShowArgs),
    #[command(about = "Create a todo")]
    Add(add::AddArgs),
    #[command(about = "Edit a todo")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a todo")]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a todo resolved, or active again")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Export todos to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::load()?;
        cli.run(&config)
    }

    pub fn run(self, config: &Config) -> Result<()> {
        match self.command {
            Commands::List(args) => list::cmd(args, config),
            Commands::Show(args) => show::cmd(args, config),
            Commands::Add(args) => add::cmd(args, config),
            Commands::Edit(args) => edit::cmd(args, config),
            Commands::Delete(args) => delete::cmd(args, config),
            Commands::Toggle(args) => toggle::cmd(args, config),
            Commands::Export(args) => export::cmd(args, config),
            Commands::Init => init::cmd(),
            Commands::Migrations(args) => migrations::cmd(args, config),
        }
    }
}

/// Turns a service error into the message the user sees. Field errors are
/// printed one per line before the summary error is returned.
pub(crate) fn reject(error: TodoError) -> anyhow::Error {
    match error {
        TodoError::NotFound(id) => msg_error_anyhow!(Message::TodoNotFound(id)),
        TodoError::Validation(errors) => {
            form::report(&errors);
            msg_error_anyhow!(Message::TodoValidationFailed)
        }
        storage => storage.into(),
    }
}

/// Saves `form` with `save`. In interactive mode a rejected form is shown
/// again with the entered values kept, until it is accepted or the prompt
/// is aborted.
pub(crate) fn submit<F>(mut form: TodoForm, interactive: bool, mut save: F) -> Result<Todo>
where
    F: FnMut(&TodoForm) -> Result<Todo, TodoError>,
{
    loop {
        match save(&form) {
            Ok(todo) => return Ok(todo),
            Err(TodoError::Validation(errors)) if interactive => {
                form::report(&errors);
                msg_error!(Message::TodoValidationFailed);
                form = form.prompt()?;
            }
            Err(error) => return Err(reject(error)),
        }
    }
}
