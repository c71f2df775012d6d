//! Browser networking for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` adapts `gloo-net` to the shared `accounts::Transport` seam and
//! `storage` keeps the bearer token in `localStorage`. Pages build a
//! `BrowserApi` with [`http::browser_api`] and hand it to `accounts::flow`.

pub mod http;
pub mod storage;
