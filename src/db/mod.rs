//! Database layer for todo-suite.
//!
//! A single SQLite file holds the `todos` table, the `users` table its owner
//! column points at, and the `migrations` bookkeeping table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_suite::db::todos::Todos;
//! use todo_suite::libs::config::DatabaseConfig;
//! use todo_suite::libs::todo::{StatusFilter, TodoInput};
//!
//! let mut todos = Todos::new(&DatabaseConfig::at("todo-suite.db"))?;
//! todos.insert(&TodoInput::new("Pay invoices"))?;
//! let active = todos.fetch(StatusFilter::Active, None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup: opens the file, enables foreign keys, runs migrations.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// Todo rows: insert, lookup, filtered listing, counts, update, toggle, delete.
pub mod todos;

/// Owner identities referenced by todos.
pub mod users;
