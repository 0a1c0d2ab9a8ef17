//! Local key-value storage
//!
//! A single SQLite table of string keys and string values. The schedule is
//! stored as one serialized JSON document; preferences are plain strings.

use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

use crate::core::Schedule;
use crate::error::AppError;

pub(crate) const SCHEDULE_KEY: &str = "schedule";
pub(crate) const THEME_KEY: &str = "theme";
pub(crate) const LANGUAGE_KEY: &str = "language";

const STORE_FILE: &str = "teachdash.db";

pub(crate) struct Store {
    connection: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (or create) the store inside `dir`
    pub(crate) fn open(dir: &Path) -> Result<Self, AppError> {
        std::fs::create_dir_all(dir).map_err(|source| AppError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = dir.join(STORE_FILE);
        let connection = Connection::open(&path)?;
        Self::initialize_schema(&connection)?;
        tracing::debug!("Opened store at {}", path.display());
        Ok(Self {
            connection,
            path: Some(path),
        })
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, AppError> {
        let connection = Connection::open_in_memory()?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection,
            path: None,
        })
    }

    fn initialize_schema(connection: &Connection) -> Result<(), AppError> {
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let value = self
            .connection
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub(crate) fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.connection.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub(crate) fn remove(&self, key: &str) -> Result<(), AppError> {
        self.connection
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Last stored schedule. A corrupted entry is dropped with a warning
    /// rather than blocking every view.
    pub(crate) fn load_schedule(&self) -> Result<Option<Schedule>, AppError> {
        let Some(json) = self.get(SCHEDULE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(schedule) => Ok(Some(schedule)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored schedule: {}", e);
                Ok(None)
            }
        }
    }

    pub(crate) fn save_schedule(&self, schedule: &Schedule) -> Result<(), AppError> {
        let json = serde_json::to_string(schedule)?;
        self.set(SCHEDULE_KEY, &json)
    }
}

/// Default location of the store: `<data dir>/teachdash`
pub(crate) fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("teachdash"))
}
