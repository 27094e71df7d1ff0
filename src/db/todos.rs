//! Todo table access.
//!
//! The store assigns ids and owns both timestamps: `created_at` is written
//! once by [`Todos::insert`], `updated_at` is refreshed by every write and
//! always moves strictly forward for a given row.
//!
//! Read-modify-write operations run inside an immediate transaction, so the
//! write lock is taken before the read and concurrent writers queue on the
//! busy timeout instead of failing. Writers to the same row are
//! last-write-wins.

use super::db::Db;
use crate::libs::config::DatabaseConfig;
use crate::libs::todo::{format_timestamp, next_timestamp, parse_timestamp, StatusFilter, Todo, TodoInput, Totals};
use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql, TransactionBehavior};

const SELECT_TODOS: &str =
    "SELECT id, owner_id, title, notes, due_date, priority, is_resolved, created_at, updated_at FROM todos";
const WHERE_ID: &str = "WHERE id = ?1";

/// Unresolved first, then by due date with undated rows last, then higher
/// priority, then most recently touched.
const ORDER_LISTING: &str =
    "ORDER BY is_resolved ASC, due_date IS NULL ASC, due_date ASC, priority DESC, updated_at DESC, id DESC";

const INSERT_TODO: &str = "INSERT INTO todos (owner_id, title, notes, due_date, priority, is_resolved, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)";
const UPDATE_TODO: &str = "UPDATE todos
    SET owner_id = ?2, title = ?3, notes = ?4, due_date = ?5, priority = ?6, is_resolved = ?7, updated_at = ?8
    WHERE id = ?1";
const UPDATE_RESOLVED: &str = "UPDATE todos SET is_resolved = ?2, updated_at = ?3 WHERE id = ?1";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
const COUNT_TODOS: &str = "SELECT
    COUNT(*),
    COALESCE(SUM(CASE WHEN is_resolved THEN 0 ELSE 1 END), 0),
    COALESCE(SUM(CASE WHEN is_resolved THEN 1 ELSE 0 END), 0)
    FROM todos";

pub struct Todos {
    conn: Connection,
}

impl Todos {
    pub fn new(config: &DatabaseConfig) -> Result<Todos> {
        let db = Db::new(config)?;
        Ok(Todos { conn: db.conn })
    }

    /// Inserts a row with `created_at = updated_at = now` and returns it as stored.
    pub fn insert(&mut self, input: &TodoInput) -> rusqlite::Result<Todo> {
        let now = format_timestamp(&next_timestamp(None));
        self.conn.execute(
            INSERT_TODO,
            params![input.owner_id, input.title, input.notes, input.due_date, input.priority, input.is_resolved, now],
        )?;

        let id = self.conn.last_insert_rowid();
        select_one(&self.conn, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    pub fn get(&mut self, id: i64) -> rusqlite::Result<Option<Todo>> {
        select_one(&self.conn, id)
    }

    pub fn exists(&mut self, id: i64) -> rusqlite::Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Todos matching `filter`, and `search` when given, in listing order.
    ///
    /// `search` is a case-insensitive substring match on title or notes.
    pub fn fetch(&mut self, filter: StatusFilter, search: Option<&str>) -> rusqlite::Result<Vec<Todo>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(resolved) = filter.resolved() {
            conditions.push("is_resolved = ?");
            values.push(Box::new(resolved));
        }

        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", escape_like(term));
            conditions.push("(title LIKE ? ESCAPE '\\' OR notes LIKE ? ESCAPE '\\')");
            values.push(Box::new(pattern.clone()));
            values.push(Box::new(pattern));
        }

        let sql = if conditions.is_empty() {
            format!("{} {}", SELECT_TODOS, ORDER_LISTING)
        } else {
            format!("{} WHERE {} {}", SELECT_TODOS, conditions.join(" AND "), ORDER_LISTING)
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let todo_iter = stmt.query_map(params_from_iter(values.iter()), todo_from_row)?;

        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }
        Ok(todos)
    }

    pub fn counts(&mut self) -> rusqlite::Result<Totals> {
        self.conn.query_row(COUNT_TODOS, [], |row| {
            Ok(Totals {
                total: row.get::<_, i64>(0)? as u64,
                active: row.get::<_, i64>(1)? as u64,
                resolved: row.get::<_, i64>(2)? as u64,
            })
        })
    }

    /// Overwrites every mutable field. `None` when the id does not exist.
    pub fn update(&mut self, id: i64, input: &TodoInput) -> rusqlite::Result<Option<Todo>> {
        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let Some(current) = select_one(&tx, id)? else {
            return Ok(None);
        };
        let updated_at = format_timestamp(&next_timestamp(Some(current.updated_at)));

        tx.execute(
            UPDATE_TODO,
            params![id, input.owner_id, input.title, input.notes, input.due_date, input.priority, input.is_resolved, updated_at],
        )?;
        let todo = select_one(&tx, id)?;

        tx.commit()?;
        Ok(todo)
    }

    /// Flips `is_resolved` and returns the new value. `None` when the id does not exist.
    pub fn toggle(&mut self, id: i64) -> rusqlite::Result<Option<bool>> {
        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let Some(current) = select_one(&tx, id)? else {
            return Ok(None);
        };
        let resolved = !current.is_resolved;
        let updated_at = format_timestamp(&next_timestamp(Some(current.updated_at)));

        tx.execute(UPDATE_RESOLVED, params![id, resolved, updated_at])?;

        tx.commit()?;
        Ok(Some(resolved))
    }

    /// Hard delete. Returns the number of removed rows (0 or 1).
    pub fn delete(&mut self, id: i64) -> rusqlite::Result<usize> {
        self.conn.execute(DELETE_TODO, params![id])
    }
}

fn select_one(conn: &Connection, id: i64) -> rusqlite::Result<Option<Todo>> {
    conn.query_row(&format!("{} {}", SELECT_TODOS, WHERE_ID), params![id], todo_from_row).optional()
}

fn todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        notes: row.get(3)?,
        due_date: row.get(4)?,
        priority: row.get(5)?,
        is_resolved: row.get(6)?,
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
    })
}

fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<chrono::DateTime<chrono::Utc>> {
    let value: String = row.get(idx)?;
    parse_timestamp(&value).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
