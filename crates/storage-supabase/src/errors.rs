//! Storage-specific error types for the REST backend.
//!
//! These errors wrap HTTP client and decoding failures and are converted to
//! the backend-agnostic error types defined in `appfinance_core` before they
//! leave this crate.

use appfinance_core::errors::{AuthError, BackendError, Error};
use serde::Deserialize;
use thiserror::Error;

pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No rows returned from {0}")]
    EmptyResult(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl StorageError {
    /// Builds a status error, pulling the most useful message out of the
    /// body. Table errors carry `message`; auth errors use `msg`,
    /// `error_description` or `error`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.msg).or(b.error_description).or(b.error))
            .unwrap_or_else(|| body.chars().take(200).collect());
        StorageError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            StorageError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Request(e) => Error::Backend(BackendError::RequestFailed(e.to_string())),
            StorageError::Status {
                status: 401 | 403, ..
            } => Error::Auth(AuthError::Unauthorized),
            StorageError::Status { status, message } => {
                Error::Backend(BackendError::Status { status, message })
            }
            StorageError::Decode(e) => Error::Backend(BackendError::Decode(e.to_string())),
            StorageError::EmptyResult(table) => Error::Backend(BackendError::EmptyResult(table)),
            // A token that cannot even be sent as a header is not a valid token.
            StorageError::InvalidHeader(_) => Error::Auth(AuthError::Unauthorized),
            StorageError::InvalidUrl(e) => Error::InvalidConfigValue(e.to_string()),
        }
    }
}
