//! Sent and received approval snapshot queries.

use rusqlite::{params, types::Type, Connection, Row, TransactionBehavior};

use super::settings_queries::json_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{ApprovalStatus, ReceivedApprovalItem, SentApprovalItem},
    workflow::ApprovalStore,
};

// Lists are prepended as items are created, so newest id first matches the
// in-memory order.
const SELECT_SENT_SQL: &str = "SELECT id, date, title, document_type, drafter, approvers, current_step, status FROM sent_approvals ORDER BY id DESC";
const SELECT_RECEIVED_SQL: &str = "SELECT id, date, document_type, content, drafter, approver, step, status, sent_approval_id FROM received_approvals ORDER BY id DESC";
const INSERT_SENT_SQL: &str = "INSERT INTO sent_approvals (id, date, title, document_type, drafter, approvers, current_step, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const INSERT_RECEIVED_SQL: &str = "INSERT INTO received_approvals (id, date, document_type, content, drafter, approver, step, status, sent_approval_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

impl super::Database {
    /// Rebuilds the approval store from the snapshot.
    pub fn load_store(&self) -> Result<ApprovalStore> {
        Self::read_store(&self.connection)
    }

    /// Replaces the snapshot with the current state of `store` in one
    /// transaction.
    pub fn save_store(&mut self, store: &ApprovalStore) -> Result<()> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        Self::write_store(&tx, store)?;
        tx.commit().db_context("Failed to commit transaction")
    }

    /// Loads the store, applies `action` and saves the result, all inside
    /// one write transaction.
    ///
    /// The write lock is taken before reading, so a concurrent writer on the
    /// same file waits instead of overwriting this update. When `action`
    /// fails nothing is written.
    pub fn update_store<T, F>(&mut self, action: F) -> Result<T>
    where
        F: FnOnce(&mut ApprovalStore) -> Result<T>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut store = Self::read_store(&tx)?;
        let output = action(&mut store)?;
        Self::write_store(&tx, &store)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(output)
    }

    /// Outbox, newest first.
    pub fn load_sent(&self) -> Result<Vec<SentApprovalItem>> {
        Self::read_sent(&self.connection)
    }

    /// Inbox, newest first.
    pub fn load_received(&self) -> Result<Vec<ReceivedApprovalItem>> {
        Self::read_received(&self.connection)
    }

    fn read_store(conn: &Connection) -> Result<ApprovalStore> {
        let settings = Self::read_settings(conn)?;
        let sent = Self::read_sent(conn)?;
        let received = Self::read_received(conn)?;
        Ok(ApprovalStore::from_parts(sent, received, settings))
    }

    fn write_store(conn: &Connection, store: &ApprovalStore) -> Result<()> {
        Self::write_sent(conn, store.sent_approvals())?;
        Self::write_received(conn, store.received_approvals())?;
        Self::write_settings(conn, store.settings())
    }

    fn read_sent(conn: &Connection) -> Result<Vec<SentApprovalItem>> {
        let mut stmt = conn
            .prepare(SELECT_SENT_SQL)
            .db_context("Failed to prepare sent approval query")?;
        let items = stmt
            .query_map([], row_to_sent)
            .db_context("Failed to query sent approvals")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read sent approval")?;
        Ok(items)
    }

    fn read_received(conn: &Connection) -> Result<Vec<ReceivedApprovalItem>> {
        let mut stmt = conn
            .prepare(SELECT_RECEIVED_SQL)
            .db_context("Failed to prepare received approval query")?;
        let items = stmt
            .query_map([], row_to_received)
            .db_context("Failed to query received approvals")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read received approval")?;
        Ok(items)
    }

    fn write_sent(conn: &Connection, items: &[SentApprovalItem]) -> Result<()> {
        conn.execute("DELETE FROM sent_approvals", [])
            .db_context("Failed to clear sent approvals")?;

        for item in items {
            let approvers = serde_json::to_string(&item.approvers)?;
            conn.execute(
                INSERT_SENT_SQL,
                params![
                    item.id as i64,
                    item.date,
                    item.title,
                    item.document_type,
                    item.drafter,
                    approvers,
                    item.current_step as i64,
                    item.status.as_str(),
                ],
            )
            .db_context("Failed to insert sent approval")?;
        }
        Ok(())
    }

    fn write_received(conn: &Connection, items: &[ReceivedApprovalItem]) -> Result<()> {
        conn.execute("DELETE FROM received_approvals", [])
            .db_context("Failed to clear received approvals")?;

        for item in items {
            conn.execute(
                INSERT_RECEIVED_SQL,
                params![
                    item.id as i64,
                    item.date,
                    item.document_type,
                    item.content,
                    item.drafter,
                    item.approver,
                    item.step as i64,
                    item.status.as_str(),
                    item.sent_approval_id as i64,
                ],
            )
            .db_context("Failed to insert received approval")?;
        }
        Ok(())
    }
}

fn row_to_sent(row: &Row<'_>) -> rusqlite::Result<SentApprovalItem> {
    Ok(SentApprovalItem {
        id: row.get::<_, i64>(0)? as u64,
        date: row.get(1)?,
        title: row.get(2)?,
        document_type: row.get(3)?,
        drafter: row.get(4)?,
        approvers: json_column(row, 5)?,
        current_step: row.get::<_, i64>(6)? as usize,
        status: status_column(row, 7)?,
    })
}

fn row_to_received(row: &Row<'_>) -> rusqlite::Result<ReceivedApprovalItem> {
    Ok(ReceivedApprovalItem {
        id: row.get::<_, i64>(0)? as u64,
        date: row.get(1)?,
        document_type: row.get(2)?,
        content: row.get(3)?,
        drafter: row.get(4)?,
        approver: row.get(5)?,
        step: row.get::<_, i64>(6)? as usize,
        status: status_column(row, 7)?,
        sent_approval_id: row.get::<_, i64>(8)? as u64,
    })
}

fn status_column(row: &Row<'_>, index: usize) -> rusqlite::Result<ApprovalStatus> {
    let raw: String = row.get(index)?;
    raw.parse::<ApprovalStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid approval status: {raw}"),
            )),
        )
    })
}
