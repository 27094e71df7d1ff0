use super::reject;
use crate::{
    libs::{config::Config, messages::Message, query::TodoQuery, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    id: i64,
}

pub fn cmd(args: ShowArgs, config: &Config) -> Result<()> {
    let todo = TodoQuery::new(&config.database)?.get(args.id).map_err(reject)?;

    msg_print!(Message::TodoDetailsHeader(todo.id), true);
    View::todo(&todo)?;

    Ok(())
}
