//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Network work goes through `accounts::flow` so the pages
//! only translate outcomes into signal updates.

pub mod auth;
pub mod user_list;
