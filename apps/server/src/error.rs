use appfinance_core::errors::{AuthError as CoreAuthError, Error as CoreError};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Unauthorized(String),
    /// Body or query string that could not be decoded.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

/// Shown instead of backend failure details, which only go to the log.
const BACKEND_UNAVAILABLE: &str = "Could not load or save your data. Please try again.";

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
                CoreError::Auth(CoreAuthError::SignUpRejected(reason)) => {
                    (StatusCode::BAD_REQUEST, reason.clone())
                }
                CoreError::Auth(CoreAuthError::ProfileCreationFailed(_)) => {
                    tracing::error!("{}", e);
                    (StatusCode::BAD_GATEWAY, BACKEND_UNAVAILABLE.to_string())
                }
                CoreError::Auth(_) => (StatusCode::UNAUTHORIZED, e.to_string()),
                CoreError::Backend(_) => {
                    tracing::error!("{}", e);
                    (StatusCode::BAD_GATEWAY, BACKEND_UNAVAILABLE.to_string())
                }
                CoreError::Export(_) | CoreError::InvalidConfigValue(_) | CoreError::Unexpected(_) => {
                    tracing::error!("{}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            },
            ApiError::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason.clone()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        error_response(status, message)
    }
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(ErrorBody {
        code: status.as_u16(),
        message: message.into(),
    });
    (status, body).into_response()
}

pub type ApiResult<T> = Result<T, ApiError>;
