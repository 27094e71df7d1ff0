use super::{reject, submit};
use crate::{
    libs::{config::Config, form::TodoForm, messages::Message, mutation::TodoMutation, query::TodoQuery},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Flags overwrite single fields of the stored todo. With no flags the whole
/// todo is edited interactively, starting from its current values.
#[derive(Debug, Default, Args)]
pub struct EditArgs {
    id: i64,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    notes: Option<String>,

    /// Due date as YYYY-MM-DD
    #[arg(short, long, conflicts_with = "clear_due")]
    due: Option<String>,

    /// Remove the due date
    #[arg(long)]
    clear_due: bool,

    #[arg(short, long)]
    priority: Option<String>,

    #[arg(short, long)]
    resolved: Option<bool>,

    /// Owning user id
    #[arg(short, long, conflicts_with = "clear_owner")]
    owner: Option<i64>,

    /// Remove the owner
    #[arg(long)]
    clear_owner: bool,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.notes.is_some()
            || self.due.is_some()
            || self.clear_due
            || self.priority.is_some()
            || self.resolved.is_some()
            || self.owner.is_some()
            || self.clear_owner
    }

    fn apply(&self, form: &mut TodoForm) {
        if let Some(title) = &self.title {
            form.title = title.clone();
        }
        if let Some(notes) = &self.notes {
            form.notes = notes.clone();
        }
        if let Some(due) = &self.due {
            form.due_date = due.clone();
        }
        if self.clear_due {
            form.due_date.clear();
        }
        if let Some(priority) = &self.priority {
            form.priority = priority.clone();
        }
        if let Some(resolved) = self.resolved {
            form.is_resolved = resolved;
        }
        if let Some(owner) = self.owner {
            form.owner = Some(owner);
        }
        if self.clear_owner {
            form.owner = None;
        }
    }
}

pub fn cmd(args: EditArgs, config: &Config) -> Result<()> {
    let current = TodoQuery::new(&config.database)?.get(args.id).map_err(reject)?;
    let mut form = TodoForm::from_todo(&current);

    let interactive = !args.has_changes();
    if interactive {
        msg_print!(Message::TodoDetailsHeader(current.id), true);
        form = form.prompt()?;
    } else {
        args.apply(&mut form);
    }

    let mut mutation = TodoMutation::new(&config.database)?;
    let todo = submit(form, interactive, |form| mutation.update(args.id, form))?;

    msg_success!(Message::TodoUpdated(todo.id, todo.title));
    Ok(())
}
