//! Page-level workflows shared by the web and terminal clients.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow performs the network calls for one user gesture and returns a
//! plain value describing what the caller should do with its stores. Keeping
//! the store mutation in [`apply_list_outcome`] lets the web client run the
//! same transitions inside signal updates that the CLI runs on locals.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::api::{BulkAction, TokenStore, Transport, UsersApi};
use crate::error::ApiError;
use crate::notice::ErrorSlot;
use crate::roster::UserListModel;
use crate::session::{Session, logout};
use crate::types::{User, UserId};
use crate::validate::{AuthForm, AuthMode, Credentials, FieldErrors};

/// Why an auth form submission did not sign anyone in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    /// Client-side validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The backend rejected the request with a message for the form.
    Rejected(String),
    /// Anything else; belongs in the global error modal.
    Unexpected(String),
}

impl From<ApiError> for AuthFailure {
    fn from(err: ApiError) -> Self {
        match err.server_message() {
            Some(message) => Self::Rejected(message.to_owned()),
            None => Self::Unexpected(err.to_string()),
        }
    }
}

/// Validate `form` and, if it passes, log in or register.
///
/// # Errors
///
/// See [`AuthFailure`].
pub async fn submit_auth<T, S>(
    api: &UsersApi<T, S>,
    form: &AuthForm,
    mode: AuthMode,
) -> Result<User, AuthFailure>
where
    T: Transport,
    S: TokenStore,
{
    let credentials = form.validate(mode).map_err(AuthFailure::Invalid)?;
    let result = match &credentials {
        Credentials::Login { email, password } => api.login(email, password).await,
        Credentials::Registration { email, name, password } => {
            api.registration(email, name, password).await
        }
    };
    let user = result.map_err(AuthFailure::from)?;
    tracing::info!(user_id = user.id, ?mode, "signed in");
    Ok(user)
}

/// Silently resume a previous session at start-up.
///
/// Failure of any kind means "not signed in" and is only logged.
pub async fn resume_session<T, S>(api: &UsersApi<T, S>) -> Option<User>
where
    T: Transport,
    S: TokenStore,
{
    match api.check().await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "session resumed");
            Some(user)
        }
        Err(err) => {
            tracing::debug!(error = %err, "no session to resume");
            None
        }
    }
}

/// What to do when a fetch returns an empty user list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyListPolicy {
    /// Treat "no users left" as the operator having removed themselves: sign out.
    #[default]
    Logout,
    /// Show the empty table and stay signed in.
    Keep,
}

/// Result of a list fetch, with or without a preceding bulk action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListOutcome {
    /// Install this list and clear the selection.
    Loaded(Vec<User>),
    /// The list came back empty under [`EmptyListPolicy::Logout`].
    Emptied,
    /// A call failed; show `message`, and sign out when `logout` is set.
    Failed { message: String, logout: bool },
    /// No ids were selected, nothing was sent.
    Skipped,
}

impl ListOutcome {
    fn from_error(err: &ApiError) -> Self {
        Self::Failed {
            message: err.to_string(),
            logout: err.is_unauthorized(),
        }
    }
}

/// Fetch the user list.
pub async fn load_users<T, S>(api: &UsersApi<T, S>, policy: EmptyListPolicy) -> ListOutcome
where
    T: Transport,
    S: TokenStore,
{
    match api.get_user_list().await {
        Ok(users) if users.is_empty() && policy == EmptyListPolicy::Logout => {
            tracing::info!("user list empty, signing out");
            ListOutcome::Emptied
        }
        Ok(users) => ListOutcome::Loaded(users),
        Err(err) => ListOutcome::from_error(&err),
    }
}

/// Apply `action` to `ids`, then refetch. State is only trusted after the
/// refetch; nothing is updated optimistically.
pub async fn run_bulk<T, S>(
    api: &UsersApi<T, S>,
    action: BulkAction,
    ids: &[UserId],
    policy: EmptyListPolicy,
) -> ListOutcome
where
    T: Transport,
    S: TokenStore,
{
    if ids.is_empty() {
        return ListOutcome::Skipped;
    }
    if let Err(err) = api.apply(action, ids).await {
        tracing::warn!(action = action.label(), count = ids.len(), error = %err, "bulk action failed");
        return ListOutcome::from_error(&err);
    }
    tracing::info!(action = action.label(), count = ids.len(), "bulk action applied");
    load_users(api, policy).await
}

/// Fold a [`ListOutcome`] into the table model and the global stores.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if a forced logout could not blank the token.
pub fn apply_list_outcome(
    outcome: ListOutcome,
    model: &mut UserListModel,
    session: &mut Session,
    errors: &mut ErrorSlot,
    tokens: &impl TokenStore,
) -> Result<(), ApiError> {
    match outcome {
        ListOutcome::Loaded(users) => {
            model.replace_users(users);
            Ok(())
        }
        ListOutcome::Emptied => {
            model.replace_users(Vec::new());
            logout(session, tokens)
        }
        ListOutcome::Failed { message, logout: force } => {
            model.loading = false;
            errors.raise(message);
            if force { logout(session, tokens) } else { Ok(()) }
        }
        ListOutcome::Skipped => Ok(()),
    }
}
