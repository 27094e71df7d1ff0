use super::migrations::init_with_migrations;
use crate::libs::config::DatabaseConfig;
use anyhow::Result;
use rusqlite::Connection;
use std::time::Duration;

/// How long a write waits on a lock held by another connection.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database and brings its schema up to date.
    pub fn new(config: &DatabaseConfig) -> Result<Db> {
        let mut conn = Self::new_without_migrations(config)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn new_without_migrations(config: &DatabaseConfig) -> Result<Connection> {
        let db_file_path = config.resolve_path()?;
        tracing::debug!(path = %db_file_path.display(), "opening database");

        let conn = Connection::open(db_file_path)?;
        Self::configure(&conn)?;

        Ok(conn)
    }

    fn configure(conn: &Connection) -> rusqlite::Result<()> {
        // Owner cascade relies on the engine enforcing foreign keys.
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(())
    }
}
