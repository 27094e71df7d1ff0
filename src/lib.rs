//! # Todo Suite
//!
//! A small personal task tracker. Todos have a title, free-text notes, an
//! optional due date, a priority and a resolved flag, and live in a local
//! SQLite database.
//!
//! ## Features
//!
//! - **Listing**: status filter (all/active/resolved), search, totals
//! - **Editing**: create, update, delete, one-step resolve/unresolve toggle
//! - **Validation**: per-field messages, nothing written on bad input
//! - **Owners**: optional owner reference, cascade-deleted with the owner
//! - **Export**: CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_suite::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
