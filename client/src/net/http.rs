//! `gloo-net` transport for the shared REST layer.
//!
//! Client-side (hydrate): real `fetch` calls.
//! Server-side (SSR): every send fails with a network error, since the backend
//! is only contacted from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use accounts::api::join_url;
use accounts::{ApiError, ApiRequest, ApiResponse, Transport, UsersApi};
use async_trait::async_trait;

use super::storage::LocalStorageTokens;
use crate::state::config::ClientConfig;

/// The REST client every page uses.
pub type BrowserApi = UsersApi<GlooTransport, LocalStorageTokens>;

/// Build a [`BrowserApi`] against the configured backend.
#[must_use]
pub fn browser_api(config: &ClientConfig) -> BrowserApi {
    UsersApi::new(GlooTransport::new(&config.api_base), LocalStorageTokens)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlooTransport {
    base: String,
}

impl GlooTransport {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: base.to_owned() }
    }

    /// Absolute (or origin-relative) URL for an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use accounts::Method;
            use gloo_net::http::Request;

            let url = self.url(&request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(value) = request.authorization() {
                builder = builder.header("Authorization", &value);
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(network_error)?;

            let resp = outgoing.send().await.map_err(network_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network_error)?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
