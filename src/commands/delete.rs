use super::reject;
use crate::{
    libs::{config::Config, messages::Message, mutation::TodoMutation, query::TodoQuery},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs, config: &Config) -> Result<()> {
    let todo = TodoQuery::new(&config.database)?.get(args.id).map_err(reject)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTodo(todo.title.clone()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_warning!(Message::OperationCancelled);
            return Ok(());
        }
    }

    TodoMutation::new(&config.database)?.delete(todo.id).map_err(reject)?;

    msg_success!(Message::TodoDeleted(todo.id));
    Ok(())
}
