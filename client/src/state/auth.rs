//! Auth-session state for the current browser operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the router guard, the header and both pages to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use accounts::{Session, User};

/// Session store plus the start-up "still checking the stored token" flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    /// True until the initial session check settles.
    pub loading: bool,
}

impl AuthState {
    /// State at application start: anonymous, check pending.
    #[must_use]
    pub fn resolving() -> Self {
        Self { session: Session::default(), loading: true }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Settle the start-up check with its result.
    pub fn finish_check(&mut self, user: Option<User>) {
        if let Some(user) = user {
            self.session.sign_in(user);
        }
        self.loading = false;
    }

    /// Route guard answer: `None` while loading, then whether `/users` is open.
    #[must_use]
    pub fn route_allowed(&self) -> Option<bool> {
        if self.loading { None } else { Some(self.is_authenticated()) }
    }
}
