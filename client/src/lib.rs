//! # client
//!
//! Leptos + WASM frontend for the user administration console.
//!
//! This crate contains the root shell and router, the auth and user-list
//! pages, shared components, and the browser glue (`gloo-net` transport and
//! `localStorage` token slot) that plugs into the `accounts` REST layer. It is
//! server-rendered by the host binary (`ssr`) and hydrated in the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
