use thiserror::Error;

/// Errors raised while talking to the cluster-management backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport level failure (connection refused, timeout, TLS)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The backend answered with a non-success status
    #[error("Network response was not ok: {status} {body}")]
    Status { status: u16, body: String },
    /// The body was not the expected JSON array
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

/// Errors raised while loading or saving dashboard settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Home directory not found")]
    HomeNotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

pub type SettingsResult<T> = Result<T, SettingsError>;
