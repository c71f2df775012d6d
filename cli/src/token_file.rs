//! Token persistence for the terminal client.
//!
//! The token is a single line in a plain file. Logout overwrites it with the
//! empty string, which reads back as "no token", so the file may exist and be
//! empty.

#[cfg(test)]
#[path = "token_file_test.rs"]
mod token_file_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use accounts::api::non_empty;
use accounts::{ApiError, TokenStore};
use directories::ProjectDirs;

use crate::error::CliError;

const TOKEN_FILE: &str = "token";

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Token file under the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoDataDir`] when no home directory is known.
    pub fn default_location() -> Result<Self, CliError> {
        let dirs = ProjectDirs::from("", "userdesk", "userdesk-cli").ok_or(CliError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join(TOKEN_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error(path: &Path, err: std::io::Error) -> ApiError {
    ApiError::Storage(format!("{}: {err}", path.display()))
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, ApiError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(non_empty(raw.trim())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(&self.path, err)),
        }
    }

    fn store(&self, token: &str) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| storage_error(parent, e))?;
        }
        std::fs::write(&self.path, token).map_err(|e| storage_error(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), empty = token.is_empty(), "token written");
        Ok(())
    }
}
