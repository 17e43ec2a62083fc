//! Application error handling
//!
//! Handlers return `ApiResult<T>`; every error renders as the standard
//! `{success: false, error}` envelope. Only validation failures and unknown
//! routes get a dedicated status; everything else collapses to 500 with the
//! error's own message, which is the contract existing clients rely on.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bodysense_shared::{ApiResponse, ValidationError};
use std::any::Any;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid value for query parameter '{name}': {value:?}")]
    InvalidQuery { name: &'static str, value: String },

    /// Body or query string the extractors could not read
    #[error("{0}")]
    MalformedRequest(String),

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// HTTP status for this error on the wire
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(ValidationError::UnsupportedBody(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidQuery { .. }
            | ApiError::MalformedRequest(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            match &self {
                ApiError::Internal(err) => error!("Internal error: {:?}", err),
                other => error!(error = %other, "Request failed"),
            }
        }

        let body = Json(ApiResponse::<()>::failure(self.to_string()));

        (status, body).into_response()
    }
}

/// Render a handler panic as the 500 envelope
///
/// Installed through `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(text) = panic.downcast_ref::<String>() {
        text.clone()
    } else if let Some(text) = panic.downcast_ref::<&str>() {
        text.to_string()
    } else {
        "Unknown panic".to_string()
    };

    ApiError::from(anyhow::anyhow!(message)).into_response()
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
