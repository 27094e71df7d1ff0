use super::reject;
use crate::{
    libs::{config::Config, messages::Message, mutation::TodoMutation},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    id: i64,
}

pub fn cmd(args: ToggleArgs, config: &Config) -> Result<()> {
    let resolved = TodoMutation::new(&config.database)?.toggle(args.id).map_err(reject)?;

    msg_success!(Message::TodoToggled(args.id, resolved));
    Ok(())
}
