//! Founder and Finder role views.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role an account holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleKind {
    /// Owner of ideas.
    Founder,
    /// Member joining ideas.
    Finder,
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Founder => f.write_str("Founder"),
            Self::Finder => f.write_str("Finder"),
        }
    }
}

/// Role record joined with the username of its account.
///
/// Displays as `"{username} - Founder"` or `"{username} - Finder"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRole {
    /// Primary key of the founder or finder record.
    pub id: i32,
    /// Role of the record.
    pub kind: RoleKind,
    /// ID of the account holding the role.
    pub account_id: i32,
    /// Username of the account.
    pub username: String,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.username, self.kind)
    }
}

/// Both roles of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRoles {
    /// Founder record.
    pub founder: AccountRole,
    /// Finder record.
    pub finder: AccountRole,
}
