//! Settings table access and the SQLite-backed preference store

use chrono::Utc;
use rusqlite::{params, Connection, Result};
use std::path::Path;

use super::{schema, LogOnError, PreferenceStore, StoreError};

fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
    let mut rows = stmt.query(params![key])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row.get(0)?))
    } else {
        Ok(None)
    }
}

fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
        params![key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Preference store persisted in a SQLite `settings` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).log_warn("Failed to create preference db directory");
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        schema::run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl PreferenceStore for SqliteStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        get_setting(&self.conn, key).map_err(StoreError::from)
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        set_setting(&self.conn, key, value).map_err(StoreError::from)
    }
}
