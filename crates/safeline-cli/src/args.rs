use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ApprovalCommands, RecordCommands, SettingsCommands};

/// Approval workflow and record filtering for safety-management documents
///
/// Safeline keeps approval requests for TBM logs, inspections, risk
/// assessments and other safety documents. Each request walks an ordered
/// chain of approver roles. Record lists exported as JSON can be filtered
/// and paged the way the list screens do.
#[derive(Parser)]
#[command(version, about, name = "safeline")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/safeline/safeline.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Built-in account to act as ('admin' or 'user', default 'user')
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Without a command, the signed-in user's pending inbox is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Filter and page a JSON record list
    #[command(alias = "r")]
    Records {
        #[command(subcommand)]
        command: RecordCommands,
    },
    /// Request, decide and list approvals
    #[command(alias = "a")]
    Approval {
        #[command(subcommand)]
        command: ApprovalCommands,
    },
    /// Show or change approval lines and document policies
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Start the MCP server
    Serve,
}
