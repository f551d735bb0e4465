//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Current schema version stored in `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Records the schema version for databases created before versioning.
    fn apply_migrations(&self) -> Result<()> {
        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")?;

        if version < SCHEMA_VERSION {
            self.connection
                .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
                .db_context("Failed to update schema version")?;
        }

        Ok(())
    }

    /// Returns the schema version recorded in the database.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }
}
