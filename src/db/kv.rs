//! `kv` table backing the shift timer's persisted flags.

use crate::db::migrate::ensure_schema;
use crate::errors::AppResult;
use crate::store::KvStore;
use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        ensure_schema(&conn)?;
        Ok(Self::new(conn))
    }

    pub fn try_get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.lock();
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn try_set(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock().execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// All persisted entries, ordered by key.
    pub fn entries(&self) -> AppResult<Vec<(String, String)>> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT key, value FROM kv ORDER BY key ASC")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// The timer contract has no error channel: a failed read is "absent",
// a failed write is reported and dropped. `try_remove` keeps the error.
impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key) {
            Ok(v) => v,
            Err(e) => {
                warning(format!("Failed to read '{}': {}", key, e));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.try_set(key, value) {
            warning(format!("Failed to persist '{}': {}", key, e));
        }
    }

    fn try_remove(&self, key: &str) -> AppResult<()> {
        self.lock()
            .execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.try_remove(key) {
            warning(format!("Failed to remove '{}': {}", key, e));
        }
    }
}
