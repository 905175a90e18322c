//! Data models for approval requests, approval policy, users and records.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay separate from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use safeline_core::models::{ApprovalStatus, SentApprovalItem};
//!
//! let sent = SentApprovalItem {
//!     id: 1,
//!     date: "2024-05-02".to_string(),
//!     title: "5월 정기 안전점검".to_string(),
//!     document_type: "안전점검".to_string(),
//!     drafter: "김안전".to_string(),
//!     approvers: vec!["안전보건관리책임자".to_string(), "경영책임자".to_string()],
//!     current_step: 0,
//!     status: ApprovalStatus::Pending,
//! };
//! assert_eq!(sent.progress(), "0/2");
//! assert_eq!(sent.final_approver(), Some("경영책임자"));
//! ```

pub mod approval;
pub mod record;
pub mod settings;
pub mod status;
pub mod user;

#[cfg(test)]
mod tests;

pub use approval::{ReceivedApprovalItem, SentApprovalItem};
pub use record::Record;
pub use settings::{ApprovalLine, ApprovalSettings, DocumentSetting};
pub use status::ApprovalStatus;
pub use user::{role_rank, superior_approvers, User, ROLE_HIERARCHY};
