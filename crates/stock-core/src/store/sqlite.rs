//! SQLite-backed key-value store.
//!
//! One `kv` table holds every key. Each `set_raw` is a single upsert, so a
//! write is durable as soon as the statement returns.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{Result, StockError};
use crate::store::traits::KeyValueStore;

pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteStore {
    const SCHEMA: &'static str = r#"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#;

    /// Open (or create) a store file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StockError::Storage` if the parent directory cannot be
    /// created or the file is not a SQLite database.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(Self::SCHEMA)?;
        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn,
        })
    }

    /// Open a throwaway store that lives only as long as this value.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(Self::SCHEMA)?;
        Ok(Self { path: None, conn })
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run SQLite's own consistency check.
    pub fn check_integrity(&self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if result != "ok" {
            return Err(StockError::Storage(format!(
                "Integrity check failed: {}",
                result
            )));
        }
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (key, value, &updated_at),
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?", [key])?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for key in rows {
            keys.push(key?);
        }
        Ok(keys)
    }
}
