//! Users and the approver role hierarchy.

use serde::{Deserialize, Serialize};

/// Approver roles from lowest to highest rank.
pub const ROLE_HIERARCHY: [&str; 5] = [
    "관리감독자",
    "안전관리자",
    "보건관리자",
    "안전보건관리책임자",
    "경영책임자",
];

/// Position of a role in [`ROLE_HIERARCHY`], or `None` for roles outside it.
pub fn role_rank(role: &str) -> Option<usize> {
    ROLE_HIERARCHY.iter().position(|r| *r == role)
}

/// Keep only the approvers ranked strictly above `requester_role`,
/// preserving their order.
///
/// Roles outside the hierarchy are dropped. A requester outside the
/// hierarchy ranks below every known role.
///
/// ```rust
/// use safeline_core::models::superior_approvers;
///
/// let chain = superior_approvers(
///     "안전관리자",
///     &["관리감독자".to_string(), "경영책임자".to_string()],
/// );
/// assert_eq!(chain, vec!["경영책임자".to_string()]);
/// ```
pub fn superior_approvers(requester_role: &str, approvers: &[String]) -> Vec<String> {
    let requester = role_rank(requester_role);
    approvers
        .iter()
        .filter(|approver| match (role_rank(approver), requester) {
            (Some(rank), Some(own)) => rank > own,
            (Some(_), None) => true,
            (None, _) => false,
        })
        .cloned()
        .collect()
}

/// A signed-in user of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Login name
    pub username: String,

    /// Display name, recorded as the drafter of requests
    pub name: String,

    /// Approver role used to rank the user against approval chains
    pub role: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}
