//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Validation problems never reach this type; they stay inside the form as
//! [`crate::validate::FieldErrors`]. Everything that crosses the network ends up
//! here and is routed by the caller: a server `message` goes inline or to the
//! error modal, 401/403 forces logout, and the rest is shown as display text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call made through [`crate::api::UsersApi`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{}", status_text(*status, message.as_deref()))]
    Status {
        status: u16,
        /// `message` field of the error body, when the backend sent one.
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("Network Error: {0}")]
    Network(String),
    /// A 2xx response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Reading or writing the persisted token failed.
    #[error("token storage failed: {0}")]
    Storage(String),
    /// An authenticated call was attempted with no stored token.
    #[error("not signed in")]
    MissingToken,
    /// A bulk call was attempted with no ids.
    #[error("no users selected")]
    EmptySelection,
}

fn status_text(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_owned(),
        None => format!("Request failed with status code {status}"),
    }
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this response means the session is no longer valid.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Message the backend attached to the rejection, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}
