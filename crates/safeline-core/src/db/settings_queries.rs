//! Approval line and document setting queries.

use std::collections::BTreeMap;

use rusqlite::{params, types::Type, Connection, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ApprovalLine, ApprovalSettings, DocumentSetting},
};

const SELECT_LINES_SQL: &str = "SELECT id, name, approvers FROM approval_lines ORDER BY id";
const SELECT_DOCUMENTS_SQL: &str =
    "SELECT document_type, use_approval, approval_line_id FROM document_settings ORDER BY document_type";
const INSERT_LINE_SQL: &str = "INSERT INTO approval_lines (id, name, approvers) VALUES (?1, ?2, ?3)";
const INSERT_DOCUMENT_SQL: &str =
    "INSERT INTO document_settings (document_type, use_approval, approval_line_id) VALUES (?1, ?2, ?3)";

impl super::Database {
    /// Loads every approval line and document setting.
    pub fn load_settings(&self) -> Result<ApprovalSettings> {
        Self::read_settings(&self.connection)
    }

    pub(crate) fn read_settings(conn: &Connection) -> Result<ApprovalSettings> {
        let mut stmt = conn
            .prepare(SELECT_LINES_SQL)
            .db_context("Failed to prepare approval line query")?;
        let lines = stmt
            .query_map([], row_to_line)
            .db_context("Failed to query approval lines")?
            .map(|line| line.map(|line| (line.id.clone(), line)))
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()
            .db_context("Failed to read approval line")?;

        let mut stmt = conn
            .prepare(SELECT_DOCUMENTS_SQL)
            .db_context("Failed to prepare document setting query")?;
        let documents = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    DocumentSetting {
                        use_approval: row.get(1)?,
                        approval_line_id: row.get(2)?,
                    },
                ))
            })
            .db_context("Failed to query document settings")?
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()
            .db_context("Failed to read document setting")?;

        Ok(ApprovalSettings { lines, documents })
    }

    /// Replaces all stored settings. Callers provide the transaction.
    pub(crate) fn write_settings(conn: &Connection, settings: &ApprovalSettings) -> Result<()> {
        conn.execute("DELETE FROM document_settings", [])
            .db_context("Failed to clear document settings")?;
        conn.execute("DELETE FROM approval_lines", [])
            .db_context("Failed to clear approval lines")?;

        for line in settings.lines.values() {
            let approvers = serde_json::to_string(&line.approvers)?;
            conn.execute(INSERT_LINE_SQL, params![line.id, line.name, approvers])
                .db_context("Failed to insert approval line")?;
        }

        for (document_type, setting) in &settings.documents {
            conn.execute(
                INSERT_DOCUMENT_SQL,
                params![
                    document_type,
                    setting.use_approval,
                    setting.approval_line_id
                ],
            )
            .db_context("Failed to insert document setting")?;
        }

        Ok(())
    }
}

fn row_to_line(row: &Row<'_>) -> rusqlite::Result<ApprovalLine> {
    Ok(ApprovalLine {
        id: row.get(0)?,
        name: row.get(1)?,
        approvers: json_column(row, 2)?,
    })
}

/// Decode a JSON-encoded `Vec<String>` column.
pub(crate) fn json_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(index)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
