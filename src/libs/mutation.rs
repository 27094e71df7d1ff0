//! Validated writes to the todo store.
//!
//! Each operation is one unit of work. Validation happens before anything
//! is written, so a rejected form leaves the store untouched.

use super::config::DatabaseConfig;
use super::error::TodoError;
use super::form::TodoForm;
use super::todo::{Todo, TodoInput};
use crate::db::todos::Todos;
use crate::db::users::Users;
use anyhow::Result;

pub struct TodoMutation {
    todos: Todos,
    users: Users,
}

impl TodoMutation {
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        Ok(TodoMutation {
            todos: Todos::new(config)?,
            users: Users::new(config)?,
        })
    }

    pub fn create(&mut self, form: &TodoForm) -> Result<Todo, TodoError> {
        let input = self.clean(form)?;
        let todo = self.todos.insert(&input)?;

        tracing::info!(todo_id = todo.id, resolved = todo.is_resolved, "todo created");
        Ok(todo)
    }

    /// Overwrites every mutable field of `id` with the form's values.
    pub fn update(&mut self, id: i64, form: &TodoForm) -> Result<Todo, TodoError> {
        if !self.todos.exists(id)? {
            return Err(TodoError::NotFound(id));
        }

        let input = self.clean(form)?;
        // The row may have been deleted between the check and the write.
        let todo = self.todos.update(id, &input)?.ok_or(TodoError::NotFound(id))?;

        tracing::info!(todo_id = id, resolved = todo.is_resolved, "todo updated");
        Ok(todo)
    }

    pub fn delete(&mut self, id: i64) -> Result<(), TodoError> {
        if self.todos.delete(id)? == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = id, "todo deleted");
        Ok(())
    }

    /// Flips the resolved flag and returns its new value.
    pub fn toggle(&mut self, id: i64) -> Result<bool, TodoError> {
        let resolved = self.todos.toggle(id)?.ok_or(TodoError::NotFound(id))?;

        tracing::info!(todo_id = id, resolved, "todo toggled");
        Ok(resolved)
    }

    /// Form validation plus the one rule that needs the store: the owner must exist.
    fn clean(&mut self, form: &TodoForm) -> Result<TodoInput, TodoError> {
        let validated = form.validate();
        let mut errors = validated.as_ref().err().cloned().unwrap_or_default();

        if let Some(owner) = form.owner {
            if !self.users.exists(owner)? {
                errors.add("owner", format!("Select a valid owner. User {} does not exist.", owner));
            }
        }

        if !errors.is_empty() {
            tracing::debug!(errors = %errors, "todo rejected");
            return Err(TodoError::Validation(errors));
        }

        validated.map_err(TodoError::from)
    }
}
