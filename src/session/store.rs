use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use std::path::PathBuf;

use super::SessionId;
use crate::paths;

/// Storage key under which the session identifier is persisted.
pub const SESSION_KEY: &str = "chatbot_session_id";

const DB_FILE: &str = "storage.db";

/// Durable storage for the session identifier.
pub trait SessionStore {
    /// Returns the persisted identifier, if any.
    fn load(&self) -> Result<Option<SessionId>>;

    /// Persists the identifier, replacing any previous value.
    fn save(&mut self, id: &SessionId) -> Result<()>;

    /// Removes the persisted identifier.
    fn clear(&mut self) -> Result<()>;

    /// Human-readable location of the store, for diagnostics.
    fn describe(&self) -> String;
}

/// Key-value store backed by a `SQLite` database on disk.
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens the store in the user's data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(paths::data_dir()?.join(DB_FILE))
    }

    /// Opens (creating if needed) the store at `db_path`.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        let store = Self { db_path };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create kv_store table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open storage database: {}", self.db_path.display()))
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.connect()?;

        conn.query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()
        .with_context(|| format!("Failed to read '{key}' from storage"))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            [key, value],
        )
        .with_context(|| format!("Failed to write '{key}' to storage"))?;

        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.connect()?;

        conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .with_context(|| format!("Failed to remove '{key}' from storage"))?;

        Ok(())
    }
}

impl SessionStore for SqliteStore {
    fn load(&self) -> Result<Option<SessionId>> {
        Ok(self.get(SESSION_KEY)?.and_then(SessionId::new))
    }

    fn save(&mut self, id: &SessionId) -> Result<()> {
        self.set(SESSION_KEY, id.as_str())
    }

    fn clear(&mut self) -> Result<()> {
        self.remove(SESSION_KEY)
    }

    fn describe(&self) -> String {
        self.db_path.display().to_string()
    }
}

/// Store that only lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    id: Option<SessionId>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionId>> {
        Ok(self.id.clone())
    }

    fn save(&mut self, id: &SessionId) -> Result<()> {
        self.id = Some(id.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.id = None;
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory (not persisted)".to_string()
    }
}
