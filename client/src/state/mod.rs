//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The root component owns one `RwSignal` per store and provides each through
//! Leptos context: `RwSignal<AuthState>` for the session and
//! `RwSignal<ErrorSlot>` for the global error modal. `ClientConfig` is plain
//! context since it never changes after start-up.

pub mod auth;
pub mod config;
