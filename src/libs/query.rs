//! Read-only views over the todo store.
//!
//! Nothing is cached: every call is a round trip to the database.

use super::config::DatabaseConfig;
use super::error::TodoError;
use super::todo::{StatusFilter, Todo, Totals};
use crate::db::todos::Todos;
use anyhow::Result;

pub struct TodoQuery {
    todos: Todos,
}

impl TodoQuery {
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        Ok(TodoQuery {
            todos: Todos::new(config)?,
        })
    }

    /// Todos selected by `filter` in listing order: unresolved first, then by
    /// due date (undated last), then priority descending, then most recently
    /// updated.
    pub fn list(&mut self, filter: StatusFilter) -> Result<Vec<Todo>, TodoError> {
        let todos = self.todos.fetch(filter, None)?;
        tracing::debug!(status = %filter, count = todos.len(), "listed todos");
        Ok(todos)
    }

    /// Like [`list`](Self::list), narrowed to todos whose title or notes
    /// contain `term`. A blank term matches everything. Case folding covers
    /// ASCII letters only, so `été` does not match `Été`.
    pub fn search(&mut self, term: &str, filter: StatusFilter) -> Result<Vec<Todo>, TodoError> {
        let todos = self.todos.fetch(filter, Some(term))?;
        tracing::debug!(status = %filter, term, count = todos.len(), "searched todos");
        Ok(todos)
    }

    pub fn counts(&mut self) -> Result<Totals, TodoError> {
        let totals = self.todos.counts()?;
        tracing::debug!(total = totals.total, active = totals.active, resolved = totals.resolved, "counted todos");
        Ok(totals)
    }

    pub fn get(&mut self, id: i64) -> Result<Todo, TodoError> {
        self.todos.get(id)?.ok_or(TodoError::NotFound(id))
    }
}
