//! HTTP error mapping
//!
//! Every failure leaves the API as `{"error": "<message>"}`. Client errors
//! carry the service's message; everything else is logged and replaced by
//! the generic message of the operation that failed.

use crate::domain::LeadbookError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Generic 500 messages, one per operation
pub mod messages {
    pub const LIST: &str = "Failed to fetch leads";
    pub const FETCH: &str = "Failed to fetch lead";
    pub const CREATE: &str = "Failed to create lead";
    pub const UPDATE: &str = "Failed to update lead";
    pub const DELETE: &str = "Failed to delete lead";
    pub const IMPORT: &str = "Failed to import leads";
    pub const EXPORT: &str = "Failed to export leads";
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Map a service error, using `fallback` for server-side failures
    pub fn from_service(err: LeadbookError, fallback: &'static str) -> Self {
        let status = match &err {
            LeadbookError::Validation(_) | LeadbookError::Import(_) => StatusCode::BAD_REQUEST,
            LeadbookError::NotFound(_) => StatusCode::NOT_FOUND,
            LeadbookError::Conflict(_) => StatusCode::CONFLICT,
            _ => {
                crate::log_error_with_context!(&err, fallback);
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback);
            }
        };
        Self::new(status, err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Attach an operation's fallback message to a service result
pub trait OrApiError<T> {
    fn or_api_error(self, fallback: &'static str) -> ApiResult<T>;
}

impl<T> OrApiError<T> for crate::domain::Result<T> {
    fn or_api_error(self, fallback: &'static str) -> ApiResult<T> {
        self.map_err(|e| ApiError::from_service(e, fallback))
    }
}
