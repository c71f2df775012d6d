//! `reqwest` transport for the shared REST layer.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use accounts::api::join_url;
use accounts::{ApiError, ApiRequest, ApiResponse, Method, Transport};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless `base_url` is an absolute
    /// http(s) URL, or [`CliError::Http`] if the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let parsed =
            reqwest::Url::parse(base_url).map_err(|e| CliError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("userdesk-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url: base_url.to_owned() })
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self
            .client
            .request(http_method(request.method), self.url(&request.path));
        if let Some(value) = request.authorization() {
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
