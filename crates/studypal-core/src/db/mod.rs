//! SQLite storage for accounts, the signed-in session and subjects.
//!
//! Query methods live next to the tables they touch: [`user_queries`] for
//! `users` and `session`, [`subject_queries`] for `subjects`.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod subject_queries;
pub mod user_queries;

/// Owns one SQLite connection. Opened per operation by the planner.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path` and brings the schema
    /// up to date.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
