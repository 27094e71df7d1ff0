//! Minimal identity table referenced by `todos.owner_id`.
//!
//! Accounts are provisioned elsewhere; this store only exposes what the
//! owner relation needs. Deleting a user removes that user's todos through
//! the `ON DELETE CASCADE` foreign key.

use super::db::Db;
use crate::libs::config::DatabaseConfig;
use crate::libs::todo::{format_timestamp, next_timestamp, parse_timestamp};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_USER: &str = "INSERT INTO users (username, created_at) VALUES (?1, ?2)";
const SELECT_USER_BY_ID: &str = "SELECT id, username, created_at FROM users WHERE id = ?1";
const SELECT_ALL_USERS: &str = "SELECT id, username, created_at FROM users ORDER BY username";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new(config: &DatabaseConfig) -> Result<Users> {
        let db = Db::new(config)?;
        Ok(Users { conn: db.conn })
    }

    pub fn create(&mut self, username: &str) -> rusqlite::Result<User> {
        let now = format_timestamp(&next_timestamp(None));
        self.conn.execute(INSERT_USER, params![username, now])?;

        let id = self.conn.last_insert_rowid();
        self.get(id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    pub fn get(&mut self, id: i64) -> rusqlite::Result<Option<User>> {
        self.conn.query_row(SELECT_USER_BY_ID, params![id], user_from_row).optional()
    }

    pub fn exists(&mut self, id: i64) -> rusqlite::Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    pub fn list(&mut self) -> rusqlite::Result<Vec<User>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_USERS)?;
        let users = stmt.query_map([], user_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    /// Removes the user and, by cascade, every todo they own.
    pub fn delete(&mut self, id: i64) -> rusqlite::Result<usize> {
        self.conn.execute(DELETE_USER, params![id])
    }
}

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    let created_at: String = row.get(2)?;
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: parse_timestamp(&created_at)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?,
    })
}
