//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early databases stored only key and value
        let has_updated_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('kv_store') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_updated_at {
            log::info!("Migrating kv_store: adding updated_at column");
            self.connection
                .execute(
                    "ALTER TABLE kv_store ADD COLUMN updated_at INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add updated_at column to kv_store table")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::db::{Database, KeyValueStore};

    #[test]
    fn test_migrates_legacy_table() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("legacy.db");

        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE kv_store (key TEXT PRIMARY KEY NOT NULL, value TEXT NOT NULL);
                 INSERT INTO kv_store (key, value) VALUES ('planit-theme', 'dark');",
            )
            .unwrap();
        }

        let mut db = Database::new(&path).expect("Failed to open legacy database");
        assert_eq!(db.get("planit-theme").unwrap().as_deref(), Some("dark"));

        db.set("planit-theme", "light").unwrap();
        assert_eq!(db.get("planit-theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_schema_initialization_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("twice.db");

        let mut first = Database::new(&path).unwrap();
        first.set("k", "v").unwrap();
        drop(first);

        let second = Database::new(&path).unwrap();
        assert_eq!(second.get("k").unwrap().as_deref(), Some("v"));
    }
}
