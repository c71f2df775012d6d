//! `localStorage` slot for the bearer token.
//!
//! The token lives under the `token` key. Logout writes the empty string
//! instead of removing the key; an empty value reads back as "no token".
//! Outside the browser the slot is always empty and writes are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use accounts::{ApiError, TokenStore};

/// `localStorage` key holding the token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorageTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ApiError> {
    web_sys::window()
        .ok_or_else(|| ApiError::Storage("no window".to_owned()))?
        .local_storage()
        .map_err(|_| ApiError::Storage("localStorage unavailable".to_owned()))?
        .ok_or_else(|| ApiError::Storage("localStorage disabled".to_owned()))
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Result<Option<String>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?
                .get_item(TOKEN_KEY)
                .map_err(|_| ApiError::Storage("token read failed".to_owned()))?;
            Ok(raw.as_deref().and_then(accounts::api::non_empty))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn store(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|_| ApiError::Storage("token write failed".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Ok(())
        }
    }
}
