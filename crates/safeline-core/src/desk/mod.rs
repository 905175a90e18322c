//! Async facade over the approval store and the record filter.
//!
//! A [`Desk`] is what the CLI and the MCP server talk to. It knows the
//! database file and the signed-in [`User`]; every operation opens the
//! database on a blocking thread, loads the [`ApprovalStore`] snapshot,
//! applies one action and saves the snapshot back inside one write
//! transaction.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Desk ops      │    │  ApprovalStore  │    │    Database     │
//! │ (approval_ops,  │───▶│   (workflow)    │◀──▶│   (snapshot)    │
//! │  settings_ops)  │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use safeline_core::{params::SubmitDocument, desk::{DeskBuilder, Submission}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let desk = DeskBuilder::new()
//!     .with_database_path(Some(dir.path().join("safeline.db")))
//!     .with_user(Some("user"))
//!     .build()
//!     .await?;
//!
//! let submission = desk
//!     .submit_document(&SubmitDocument {
//!         document_type: "안전교육".to_string(),
//!         title: "신규자 교육".to_string(),
//!     })
//!     .await?;
//! assert!(matches!(submission, Submission::Saved { .. }));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, SafelineError},
    models::{SentApprovalItem, User},
    workflow::ApprovalStore,
};

pub mod approval_ops;
pub mod builder;
pub mod record_ops;
pub mod settings_ops;

pub use builder::DeskBuilder;

/// Outcome of saving a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The document type needs no approval.
    Saved {
        document_type: String,
        title: String,
    },
    /// An approval request was opened for the document.
    Requested(SentApprovalItem),
}

/// Entry point for approval and record operations on behalf of one user.
pub struct Desk {
    pub(crate) db_path: PathBuf,
    pub(crate) user: User,
}

impl Desk {
    pub(crate) fn new(db_path: PathBuf, user: User) -> Self {
        Self { db_path, user }
    }

    /// The account actions are performed as.
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Load the store, apply `action`, save the store. The three steps share
    /// one write transaction.
    pub(crate) async fn with_store<T, F>(&self, action: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut ApprovalStore, &User) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let user = self.user.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_store(|store| action(store, &user))
        })
        .await
        .map_err(|e| SafelineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Load the store and read from it without saving.
    pub(crate) async fn read_store<T, F>(&self, read: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&ApprovalStore, &User) -> T + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let user = self.user.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let store = db.load_store()?;
            Ok(read(&store, &user))
        })
        .await
        .map_err(|e| SafelineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
