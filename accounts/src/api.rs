//! REST call layer for the user-management backend.
//!
//! ARCHITECTURE
//! ============
//! [`UsersApi`] knows the endpoint catalogue, request bodies, token handling
//! and status classification. It does not know how bytes move: that is the
//! [`Transport`] (browser `gloo-net`, terminal `reqwest`, tests an in-memory
//! fake). The persisted token lives behind [`TokenStore`].
//!
//! Two request flavours exist, mirroring the "plain host" and "auth host" of a
//! classic SPA: auth endpoints go out without credentials, everything else
//! carries `Authorization: Bearer <token>` read fresh from the store.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{
    AuthResponse, ErrorBody, LoginBody, RegistrationBody, User, UserId, UserListResponse,
};

/// Endpoint paths, relative to the backend base URL.
pub mod endpoints {
    pub const REGISTRATION: &str = "api/users/registration";
    pub const LOGIN: &str = "api/users/login";
    pub const AUTH_CHECK: &str = "api/users/auth";
    pub const USER_LIST: &str = "api/users/data";
    pub const DELETE: &str = "api/users/delete";
    pub const BLOCK: &str = "api/users/block";
    pub const UNBLOCK: &str = "api/users/unblock";
}

/// HTTP verbs the backend uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Transport-neutral request description.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, including any query string.
    pub path: String,
    /// Bearer token to attach, if this is an authenticated call.
    pub bearer: Option<String>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Value for the `Authorization` header, if the call is authenticated.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Raw response as seen by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves an [`ApiRequest`] over the network.
///
/// Implementations must return `Ok` for every response the server produced,
/// including non-2xx ones; `Err` is reserved for requests that never got an
/// answer ([`ApiError::Network`]).
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Persistent slot for the backend-issued token.
///
/// An empty string counts as "no token".
pub trait TokenStore {
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backing store is unreadable.
    fn load(&self) -> Result<Option<String>, ApiError>;

    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backing store is unwritable.
    fn store(&self, token: &str) -> Result<(), ApiError>;

    /// Overwrite the token with the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backing store is unwritable.
    fn clear(&self) -> Result<(), ApiError> {
        self.store("")
    }
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn load(&self) -> Result<Option<String>, ApiError> {
        (**self).load()
    }

    fn store(&self, token: &str) -> Result<(), ApiError> {
        (**self).store(token)
    }
}

/// Process-local token store, used for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<String>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(token.to_owned()) }
    }

    /// Raw stored value, including the empty string.
    #[must_use]
    pub fn raw(&self) -> String {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, ApiError> {
        Ok(non_empty(&self.token.borrow()))
    }

    fn store(&self, token: &str) -> Result<(), ApiError> {
        token.clone_into(&mut self.token.borrow_mut());
        Ok(())
    }
}

/// `Some(token)` unless the stored value is empty.
#[must_use]
pub fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw.to_owned()) }
}

/// Join the backend base URL and a relative endpoint path.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Encode ids as repeated `id` query parameters: `id=1&id=2`.
#[must_use]
pub fn id_query(ids: &[UserId]) -> String {
    ids.iter()
        .map(|id| format!("id={id}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Mutating operation applied to every selected user at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkAction {
    Block,
    Unblock,
    Delete,
}

impl BulkAction {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Block | Self::Unblock => Method::Get,
            Self::Delete => Method::Delete,
        }
    }

    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Block => endpoints::BLOCK,
            Self::Unblock => endpoints::UNBLOCK,
            Self::Delete => endpoints::DELETE,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::Unblock => "Unblock",
            Self::Delete => "Delete",
        }
    }

    /// Path with the id query string appended.
    #[must_use]
    pub fn path(self, ids: &[UserId]) -> String {
        format!("{}?{}", self.endpoint(), id_query(ids))
    }
}

/// User-management REST client.
#[derive(Debug)]
pub struct UsersApi<T, S> {
    transport: T,
    tokens: S,
}

impl<T: Transport, S: TokenStore> UsersApi<T, S> {
    pub fn new(transport: T, tokens: S) -> Self {
        Self { transport, tokens }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST api/users/registration`; stores the issued token.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, decode and storage failures.
    pub async fn registration(&self, email: &str, name: &str, password: &str) -> Result<User, ApiError> {
        let body = serde_json::to_value(RegistrationBody { email, name, password })
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.authenticate(public(Method::Post, endpoints::REGISTRATION, Some(body)))
            .await
    }

    /// `POST api/users/login`; stores the issued token.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, decode and storage failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = serde_json::to_value(LoginBody { email, password })
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.authenticate(public(Method::Post, endpoints::LOGIN, Some(body)))
            .await
    }

    /// `GET api/users/auth`; validates the stored token and stores its renewal.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without a request when nothing is
    /// stored, otherwise propagates call failures.
    pub async fn check(&self) -> Result<User, ApiError> {
        let request = self.authed(Method::Get, endpoints::AUTH_CHECK)?;
        self.authenticate(request).await
    }

    /// `GET api/users/data`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn get_user_list(&self) -> Result<Vec<User>, ApiError> {
        let request = self.authed(Method::Get, endpoints::USER_LIST)?;
        let response = self.execute(request).await?;
        let body: UserListResponse = decode(&response)?;
        Ok(body.users)
    }

    /// `DELETE api/users/delete?id=..`.
    ///
    /// # Errors
    ///
    /// See [`UsersApi::apply`].
    pub async fn delete_users(&self, ids: &[UserId]) -> Result<ApiResponse, ApiError> {
        self.apply(BulkAction::Delete, ids).await
    }

    /// `GET api/users/block?id=..`.
    ///
    /// # Errors
    ///
    /// See [`UsersApi::apply`].
    pub async fn block_users(&self, ids: &[UserId]) -> Result<ApiResponse, ApiError> {
        self.apply(BulkAction::Block, ids).await
    }

    /// `GET api/users/unblock?id=..`.
    ///
    /// # Errors
    ///
    /// See [`UsersApi::apply`].
    pub async fn unblock_users(&self, ids: &[UserId]) -> Result<ApiResponse, ApiError> {
        self.apply(BulkAction::Unblock, ids).await
    }

    /// Run a bulk action and hand back the raw response. The caller refetches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptySelection`] without a request for an empty id
    /// slice, otherwise propagates call failures.
    pub async fn apply(&self, action: BulkAction, ids: &[UserId]) -> Result<ApiResponse, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::EmptySelection);
        }
        let request = self.authed(action.method(), &action.path(ids))?;
        self.execute(request).await
    }

    fn authed(&self, method: Method, path: &str) -> Result<ApiRequest, ApiError> {
        let token = self.tokens.load()?.ok_or(ApiError::MissingToken)?;
        Ok(ApiRequest {
            method,
            path: path.to_owned(),
            bearer: Some(token),
            body: None,
        })
    }

    async fn authenticate(&self, request: ApiRequest) -> Result<User, ApiError> {
        let response = self.execute(request).await?;
        let body: AuthResponse = decode(&response)?;
        self.tokens.store(&body.token)?;
        tracing::debug!(user_id = body.user.id, "token stored");
        Ok(body.user)
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!(method, %path, error = %e, "request failed");
        })?;
        tracing::debug!(method, %path, status = response.status, "response");
        if response.is_success() {
            return Ok(response);
        }
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message);
        Err(ApiError::Status { status: response.status, message })
    }
}

fn public(method: Method, path: &str, body: Option<serde_json::Value>) -> ApiRequest {
    ApiRequest {
        method,
        path: path.to_owned(),
        bearer: None,
        body,
    }
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
