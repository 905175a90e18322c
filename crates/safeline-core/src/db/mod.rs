//! SQLite persistence for the approval store.
//!
//! The workflow in [`crate::workflow`] is purely in-memory. This module
//! saves and restores a whole [`ApprovalStore`](crate::workflow::ApprovalStore)
//! as a snapshot so the CLI can pick up where the previous invocation left
//! off.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod approval_queries;
pub mod migrations;
pub mod settings_queries;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        // Writers from other processes hold the lock for one snapshot rewrite.
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mainly for tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
