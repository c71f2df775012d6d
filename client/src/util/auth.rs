//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth pages and the header apply identical redirect and sign-out
//! behavior, so the decisions live here as plain functions over `AuthState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use accounts::ErrorSlot;
use accounts::session::logout;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::storage::LocalStorageTokens;
use crate::state::auth::AuthState;

/// Landing route for a signed-in operator.
pub const USERS_PATH: &str = "/users";
/// Landing route for everyone else.
pub const LOGIN_PATH: &str = "/login";

/// True once someone is signed in; auth pages bounce them to the list.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

/// Navigate to the user list whenever the session becomes authenticated.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate(USERS_PATH, NavigateOptions::default());
        }
    });
}

/// Clear the session and blank the stored token.
///
/// A token that could not be blanked is reported through the error modal;
/// the in-memory session is cleared either way.
pub fn sign_out(auth: RwSignal<AuthState>, errors: RwSignal<ErrorSlot>) {
    let mut failure = None;
    auth.update(|state| {
        if let Err(err) = logout(&mut state.session, &LocalStorageTokens) {
            failure = Some(err);
        }
    });
    if let Some(err) = failure {
        errors.update(|slot| slot.raise(err.to_string()));
    }
}
