use super::form::DATE_FORMAT;
use super::todo::{Todo, Totals};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

const UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn todos(todos: &[Todo]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "STATUS", "TITLE", "DUE", "PRIORITY", "UPDATED"]);
        for todo in todos {
            table.add_row(row![
                todo.id,
                status_mark(todo),
                todo.title,
                due_text(todo),
                todo.priority,
                todo.updated_at.format(UPDATED_FORMAT)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn todo(todo: &Todo) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", todo.id]);
        table.add_row(row!["TITLE", todo.title]);
        table.add_row(row!["NOTES", todo.notes]);
        table.add_row(row!["DUE", due_text(todo)]);
        table.add_row(row!["PRIORITY", todo.priority]);
        table.add_row(row!["STATUS", todo.status().label()]);
        table.add_row(row!["OWNER", todo.owner_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())]);
        table.add_row(row!["CREATED", todo.created_at.format(UPDATED_FORMAT)]);
        table.add_row(row!["UPDATED", todo.updated_at.format(UPDATED_FORMAT)]);
        table.printstd();

        Ok(())
    }

    pub fn totals(totals: &Totals) {
        msg_print!(Message::TodoTotals {
            total: totals.total,
            active: totals.active,
            resolved: totals.resolved,
        });
    }
}

fn status_mark(todo: &Todo) -> &'static str {
    if todo.is_resolved {
        "[x]"
    } else {
        "[ ]"
    }
}

fn due_text(todo: &Todo) -> String {
    todo.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_else(|| "-".to_string())
}
