//! Host configuration parsed from environment variables.
//!
//! A `.env` file in the working directory is loaded first (see `main`), so
//! every variable below can live there during development.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use accounts::flow::EmptyListPolicy;
use client::state::config::ClientConfig;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the REST backend, handed to the browser.
    pub api_url: String,
    /// Sign the operator out when a fetch returns no users.
    pub logout_on_empty: bool,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `USERDESK_API_URL`: default `/` (same origin)
    /// - `USERDESK_LOGOUT_ON_EMPTY`: boolean, default true
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] for an unparseable `PORT` or boolean.
    pub fn from_env() -> Result<Self, HostError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| HostError::Config(format!("PORT={raw:?}: {e}")))?,
            Err(_) => DEFAULT_PORT,
        };
        let api_url = std::env::var("USERDESK_API_URL")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let logout_on_empty = match std::env::var("USERDESK_LOGOUT_ON_EMPTY") {
            Ok(raw) => env_bool_value(&raw)
                .ok_or_else(|| HostError::Config(format!("USERDESK_LOGOUT_ON_EMPTY={raw:?}")))?,
            Err(_) => true,
        };
        Ok(Self { port, api_url, logout_on_empty })
    }

    /// Listen address for the HTTP server.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Settings rendered into the SSR shell for the browser.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base: self.api_url.clone(),
            empty_list_policy: if self.logout_on_empty {
                EmptyListPolicy::Logout
            } else {
                EmptyListPolicy::Keep
            },
        }
    }
}

pub(crate) fn env_bool_value(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
