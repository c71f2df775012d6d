//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome (header, error modal, spinners) and
//! the pieces of the user-list page, reading shared stores from Leptos
//! context providers.

pub mod active_user_card;
pub mod error_modal;
pub mod header;
pub mod loading_button;
pub mod spinner;
