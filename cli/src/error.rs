use accounts::ApiError;
use accounts::validate::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("cannot determine a data directory; pass --token-file or set USERDESK_TOKEN_FILE")]
    NoDataDir,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid input: {0}")]
    Invalid(FieldErrors),
    #[error("rejected by server: {0}")]
    Rejected(String),
    #[error("{0}")]
    Failed(String),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
