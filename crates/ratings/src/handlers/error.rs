//! API error type and problem responses.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use ratings_core::api::{ProblemDetails, RequestError};
use ratings_core::rating::{core_error_to_status_code, CoreError};

/// Errors a handler can return.
///
/// Domain errors keep their own status mapping; request problems are always 400.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    InvalidField(#[from] RequestError),
    #[error("{0}")]
    MalformedBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Core(err) => {
                let status = StatusCode::from_u16(core_error_to_status_code(&err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

                match err {
                    CoreError::EntryNotFound { .. } => {
                        problem(status, "Not found", "Entry not found", None)
                    }
                    CoreError::InvalidRequest(message) => {
                        tracing::warn!(status = %status, message = %message, "Request rejected");
                        problem(status, "Bad request", message, None)
                    }
                    // The core already logged the cause at error level.
                    CoreError::Internal(_) => {
                        problem(status, "Internal error", "Internal error occurred", None)
                    }
                }
            }
            ApiError::InvalidField(err) => {
                tracing::warn!(error = %err, "Invalid request field");
                problem(StatusCode::BAD_REQUEST, "Bad request", err.to_string(), None)
            }
            ApiError::MalformedBody(message) => {
                tracing::warn!(message = %message, "Malformed request body");
                problem(StatusCode::BAD_REQUEST, "Bad request", message, None)
            }
        }
    }
}

/// Builds a problem response, optionally carrying a `Location` header.
pub fn problem(
    status: StatusCode,
    title: &str,
    details: impl Into<String>,
    location: Option<HeaderValue>,
) -> Response {
    let body = Json(ProblemDetails::new(status.as_u16(), title, details));

    match location {
        Some(location) => (status, [(header::LOCATION, location)], body).into_response(),
        None => (status, body).into_response(),
    }
}
