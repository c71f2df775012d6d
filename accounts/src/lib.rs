//! Shared account-administration model for the web and terminal clients.
//!
//! This crate owns everything about the user-management workflow that does not
//! depend on a rendering surface: the wire types returned by the REST backend,
//! the session and error stores, auth-form validation, the sort/selection model
//! behind the user table, and the REST call layer itself. The network and the
//! token storage are injected through [`api::Transport`] and
//! [`api::TokenStore`] so the browser (`gloo-net` + `localStorage`) and the CLI
//! (`reqwest` + a token file) share one implementation.

pub mod api;
pub mod error;
pub mod flow;
pub mod notice;
pub mod roster;
pub mod session;
pub mod timestamp;
pub mod types;
pub mod validate;

#[cfg(test)]
mod fake;

pub use api::{ApiRequest, ApiResponse, Method, TokenStore, Transport, UsersApi};
pub use error::ApiError;
pub use notice::ErrorSlot;
pub use session::Session;
pub use types::{User, UserId};
