//! Display formatting for models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes get newtype wrappers so the same data
//! can be rendered per context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Sent/Received) │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown; the CLI renders it with termimad and the MCP
//! server returns it as text content.
//!
//! ```rust
//! use safeline_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Settings updated".to_string());
//! assert!(success.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{ReceivedApprovals, RecordTable, SentApprovals};
pub use results::{CreateResult, DeleteResult, TransitionResult};
pub use status::OperationStatus;
