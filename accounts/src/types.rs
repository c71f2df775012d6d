//! Wire DTOs for the user-management REST backend.
//!
//! DESIGN
//! ======
//! The backend owns these records; the client only ever holds a transient copy
//! that is replaced wholesale on refetch, so every type here is read-only data
//! with no client-side invariants beyond what serde enforces.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Backend-assigned user identifier.
pub type UserId = i64;

/// A user record as returned by `api/users/*`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend primary key.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Last successful login as sent by the server, if any.
    #[serde(default)]
    pub last_login: Option<String>,
    /// `1` when the account is blocked, `0` otherwise.
    #[serde(default)]
    pub block_status: u8,
}

impl User {
    /// Whether the backend reports this account as blocked.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.block_status == 1
    }

    /// Parsed `last_login`, or `None` when absent or unparseable.
    #[must_use]
    pub fn last_login_at(&self) -> Option<OffsetDateTime> {
        self.last_login
            .as_deref()
            .and_then(crate::timestamp::parse_timestamp)
    }

    /// Human-readable status label used by list views.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_blocked() { "Blocked" } else { "Active" }
    }
}

/// Body of every successful auth endpoint (`registration`, `login`, `auth`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Body of `GET api/users/data`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Error body the backend attaches to rejected requests.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RegistrationBody<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
}
