//! Core library modules for todo-suite.
//!
//! - **Domain**: the todo model, form validation, error taxonomy
//! - **Services**: read-only queries and validated mutations
//! - **Infrastructure**: configuration, data directory, logging, messages
//! - **Presentation helpers**: terminal tables and file export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_suite::libs::config::Config;
//! use todo_suite::libs::form::TodoForm;
//! use todo_suite::libs::mutation::TodoMutation;
//! use todo_suite::libs::query::TodoQuery;
//! use todo_suite::libs::todo::StatusFilter;
//!
//! let config = Config::load()?;
//! let mut mutation = TodoMutation::new(&config.database)?;
//! let todo = mutation.create(&TodoForm::new("Book flights"))?;
//!
//! let mut query = TodoQuery::new(&config.database)?;
//! let active = query.list(StatusFilter::Active)?;
//! assert!(active.iter().any(|t| t.id == todo.id));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod messages;
pub mod mutation;
pub mod query;
pub mod todo;
pub mod view;
