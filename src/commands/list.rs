use super::reject;
use crate::{
    libs::{config::Config, messages::Message, query::TodoQuery, todo::StatusFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Status filter: all, active or resolved. Unknown values list everything.
    /// Defaults to the configured status.
    #[arg(short, long)]
    status: Option<String>,

    /// Only todos whose title or notes contain this text
    #[arg(long)]
    search: Option<String>,
}

pub fn cmd(args: ListArgs, config: &Config) -> Result<()> {
    let filter = match args.status.as_deref() {
        Some(status) => StatusFilter::parse(Some(status)),
        None => config.default_status(),
    };

    let mut query = TodoQuery::new(&config.database)?;
    let todos = match args.search.as_deref() {
        Some(term) => query.search(term, filter),
        None => query.list(filter),
    }
    .map_err(reject)?;
    let totals = query.counts().map_err(reject)?;

    if todos.is_empty() {
        msg_info!(Message::NoTodosFound(filter.label().to_string()));
    } else {
        msg_print!(Message::TodosHeader(filter.label().to_string()), true);
        View::todos(&todos)?;
    }
    View::totals(&totals);

    Ok(())
}
