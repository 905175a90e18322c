//! Core library for the safeline safety-management desk.
//!
//! Two engines sit at the center of this crate:
//!
//! - [`filter`] and [`pagination`]: the list-screen filter bar (date range,
//!   committed free-text search, categorical filters) and page slicing over
//!   heterogeneous JSON [`Record`]s.
//! - [`workflow`]: the multi-step approval state machine. A request walks a
//!   strictly ordered chain of approver roles, each step materialized as an
//!   inbox entry.
//!
//! Around them, [`db`] snapshots the approval store into SQLite, [`desk`]
//! offers an async facade for the CLI and the MCP server, and [`display`]
//! renders everything as markdown.
//!
//! # Quick Start
//!
//! ```rust
//! use safeline_core::{
//!     params::{Id, ListReceived, RequestApproval},
//!     DeskBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let desk = DeskBuilder::new()
//!     .with_database_path(Some(dir.path().join("safeline.db")))
//!     .build()
//!     .await?;
//!
//! let sent = desk
//!     .request_approval(&RequestApproval {
//!         document_type: "TBM".to_string(),
//!         title: "아침 TBM".to_string(),
//!         approvers: vec![],
//!     })
//!     .await?;
//! println!("{}", sent);
//!
//! // 관리감독자 drafts, so the chain starts at 안전관리자.
//! let inbox = desk.received_approvals(&ListReceived { all: true }).await?;
//! assert_eq!(inbox[0].approver, "안전관리자");
//! let result = desk.approve(&Id { id: inbox[0].id }).await?;
//! assert!(result.is_applied());
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod db;
pub mod desk;
pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod params;
pub mod workflow;

// Re-export commonly used types
pub use db::Database;
pub use desk::{Desk, DeskBuilder, Submission};
pub use display::{
    CreateResult, DeleteResult, OperationStatus, ReceivedApprovals, RecordTable, SentApprovals,
    TransitionResult,
};
pub use error::{Result, SafelineError};
pub use filter::{CategoryFilter, FilterBar};
pub use models::{
    ApprovalLine, ApprovalSettings, ApprovalStatus, DocumentSetting, ReceivedApprovalItem, Record,
    SentApprovalItem, User,
};
pub use pagination::{Page, Pagination};
pub use workflow::{ApprovalStore, Transition};
