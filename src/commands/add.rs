use super::submit;
use crate::{
    libs::{config::Config, form::TodoForm, messages::Message, mutation::TodoMutation, todo::DEFAULT_PRIORITY},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title. Without it the todo is filled in interactively.
    title: Option<String>,

    #[arg(short, long, default_value = "")]
    notes: String,

    /// Due date as YYYY-MM-DD
    #[arg(short, long)]
    due: Option<String>,

    /// Non-negative whole number, higher is more urgent
    #[arg(short, long)]
    priority: Option<String>,

    /// Create the todo already resolved
    #[arg(short, long)]
    resolved: bool,

    /// Owning user id
    #[arg(short, long)]
    owner: Option<i64>,
}

impl AddArgs {
    fn form(&self) -> TodoForm {
        TodoForm {
            title: self.title.clone().unwrap_or_default(),
            notes: self.notes.clone(),
            due_date: self.due.clone().unwrap_or_default(),
            priority: self.priority.clone().unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            is_resolved: self.resolved,
            owner: self.owner,
        }
    }
}

pub fn cmd(args: AddArgs, config: &Config) -> Result<()> {
    let interactive = args.title.is_none();
    let mut form = args.form();
    if interactive {
        form = form.prompt()?;
    }

    let mut mutation = TodoMutation::new(&config.database)?;
    let todo = submit(form, interactive, |form| mutation.create(form))?;

    msg_success!(Message::TodoCreated(todo.id, todo.title));
    Ok(())
}
