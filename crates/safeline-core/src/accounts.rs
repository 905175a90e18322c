//! Built-in accounts.
//!
//! There is no authentication. The CLI picks one of these accounts with
//! `--user` and the account's role decides which approvers a request may
//! reach and which inbox entries are shown.

use crate::{
    error::{Result, SafelineError},
    models::User,
};

/// Username used when none is given.
pub const DEFAULT_USERNAME: &str = "user";

/// The fixed account list.
pub fn accounts() -> Vec<User> {
    vec![
        User::new("admin", "관리자", "경영책임자"),
        User::new("user", "김안전", "관리감독자"),
    ]
}

/// Look up an account by username.
pub fn find_user(username: &str) -> Result<User> {
    accounts()
        .into_iter()
        .find(|user| user.username == username)
        .ok_or_else(|| SafelineError::UnknownUser {
            username: username.to_string(),
        })
}
