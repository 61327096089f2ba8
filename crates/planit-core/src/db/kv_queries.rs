//! Key-value queries against the `kv_store` table.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::{Database, KeyValueStore};
use crate::error::{DatabaseResultExt, Result};

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to read value")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().as_millisecond();
        self.connection
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .db_context("Failed to write value")?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .db_context("Failed to remove value")?;
        Ok(())
    }
}

impl Database {
    /// When the value under `key` was last written, in milliseconds since
    /// the Unix epoch.
    pub fn updated_at(&self, key: &str) -> Result<Option<i64>> {
        self.connection
            .query_row(
                "SELECT updated_at FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to read update time")
    }
}
