/*
 * Responsibility
 * - RestError: the JSON error value exchanged with the oauth service and returned to clients
 * - AppError: errors raised by handlers / middleware of this service
 * - IntoResponse for both (HTTP status / JSON error body share one shape)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body used on the wire.
///
/// The oauth service answers failed lookups with this shape and the
/// middleware forwards it to the client unchanged, so `status` and `message`
/// are the only fields a remote is required to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{status}: {message}")]
pub struct RestError {
    pub message: String,
    pub status: u16,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub causes: Vec<String>,
}

impl RestError {
    pub fn new(status: StatusCode, message: impl Into<String>, error: &str) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            error: error.to_string(),
            causes: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "bad_request")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, "not_found")
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message, "unauthorized")
    }

    /// `cause` is an opaque marker, never the text of the underlying error.
    pub fn internal_server_error(message: impl Into<String>, cause: &str) -> Self {
        let mut err = Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            "internal_server_error",
        );
        err.causes.push(cause.to_string());
        err
    }

    /// True for 4xx / 5xx.
    pub fn is_error_status(&self) -> bool {
        (400..=599).contains(&self.status)
    }

    /// HTTP status to answer with. An error body never goes out as a success.
    pub fn status_code(&self) -> StatusCode {
        if !self.is_error_status() {
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Rest(#[from] RestError),
    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Rest(err) => err,
            AppError::Unauthorized => RestError::unauthorized("unauthorized"),
        };

        body.into_response()
    }
}
