//! Scripted in-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::api::{ApiRequest, ApiResponse, Transport};
use crate::error::ApiError;

/// Replays queued responses in order and records every request it sees.
#[derive(Debug, Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    seen: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.seen.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

pub fn user_json(id: i64, name: &str, email: &str, last_login: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": email,
        "last_login": last_login,
        "block_status": 0,
    })
}

pub fn auth_json(token: &str, id: i64) -> serde_json::Value {
    serde_json::json!({
        "token": token,
        "user": user_json(id, "Alice", "alice@example.com", "2024-01-02T10:00:00Z"),
    })
}
