//! Auth-session state for the current operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The web client wraps this in an `RwSignal` provided at the root so route
//! guards, the header and the pages all observe one value; the CLI keeps it on
//! the stack for the duration of a command.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::api::TokenStore;
use crate::error::ApiError;
use crate::types::User;

/// Who is signed in, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    is_authenticated: bool,
}

impl Session {
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    pub fn set_authenticated(&mut self, value: bool) {
        self.is_authenticated = value;
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Record a successful login, registration or session check.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
    }

    /// Forget the current user.
    pub fn clear(&mut self) {
        self.user = None;
        self.is_authenticated = false;
    }
}

/// Sign out locally: clear the session and blank the persisted token.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the token could not be overwritten. The
/// session is cleared regardless.
pub fn logout(session: &mut Session, tokens: &impl TokenStore) -> Result<(), ApiError> {
    session.clear();
    tracing::info!("session cleared");
    tokens.clear()
}
