//! Database schema initialization and seeding.

use crate::{
    error::{DatabaseResultExt, Result},
    models::ApprovalSettings,
};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file and seeds
    /// the default approval policy into a fresh database.
    pub(super) fn initialize_schema(&mut self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.seed_default_settings()
    }

    /// Write [`ApprovalSettings::default`] when no approval line exists yet.
    fn seed_default_settings(&mut self) -> Result<()> {
        let line_count: i64 = self
            .connection
            .query_row("SELECT COUNT(*) FROM approval_lines", [], |row| row.get(0))
            .db_context("Failed to count approval lines")?;

        if line_count == 0 {
            log::debug!("seeding default approval settings");
            let tx = self
                .connection
                .transaction()
                .db_context("Failed to begin transaction")?;
            Self::write_settings(&tx, &ApprovalSettings::default())?;
            tx.commit().db_context("Failed to commit transaction")?;
        }

        Ok(())
    }
}
