//! Error taxonomy for todo operations.
//!
//! - [`TodoError::Validation`]: bad or missing input, reported per field; the
//!   store is never written.
//! - [`TodoError::NotFound`]: the operation targets an id that does not exist.
//! - [`TodoError::Storage`]: anything the database reports. Fatal to the
//!   request and surfaced as is; nothing in this layer retries.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Per-field validation messages, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Messages reported for one field.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.errors.iter().filter(|e| e.field == field).map(|e| e.message.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("invalid todo: {0}")]
    Validation(ValidationErrors),

    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            TodoError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for TodoError {
    fn from(errors: ValidationErrors) -> Self {
        TodoError::Validation(errors)
    }
}
