//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns no user-management API; the browser talks to the REST
//! backend directly. This router only serves the Leptos SSR pages, the
//! compiled `/pkg` assets, and a liveness probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use client::state::config::ClientConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that never touch rendering: the probe and the catch-all redirect.
fn base_routes() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback(redirect_to_login)
}

/// Leptos SSR frontend plus static assets and health probe.
pub fn app(leptos_options: LeptosOptions, client_config: ClientConfig) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), client_config.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http())
}

async fn redirect_to_login() -> Redirect {
    Redirect::temporary("/login")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
