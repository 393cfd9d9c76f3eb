//! HTTP error mapping
//!
//! Every failure is answered with `{ "success": false, "message", "error" }`
//! and the matching status code.

use crate::contract::ShelterError;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,

    pub success: bool,

    /// Short summary shown to the user
    pub message: String,

    /// Detail for this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request").with_error(detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP responses.
///
/// `operation` names what was attempted ("creating RSL") and is used for
/// the message of internal failures.
pub fn map_domain_error(error: ShelterError, operation: &str) -> ApiError {
    match error {
        ShelterError::NotFound { resource, id } => {
            ApiError::new(StatusCode::NOT_FOUND, format!("{resource} not found"))
                .with_error(format!("{resource} with id '{id}' was not found"))
        }

        ShelterError::Conflict { reason } => {
            ApiError::new(StatusCode::CONFLICT, "Conflict").with_error(reason)
        }

        ShelterError::Validation { message } => {
            ApiError::new(StatusCode::BAD_REQUEST, "Validation error").with_error(message)
        }

        ShelterError::Upload { message } => {
            ApiError::new(StatusCode::BAD_REQUEST, "Invalid logo upload").with_error(message)
        }

        ShelterError::Internal => {
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, format!("Error {operation}"))
                .with_error("An unexpected error occurred")
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), "Invalid JSON body").with_error(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid id").with_error(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::new(rejection.status(), "Invalid multipart body")
            .with_error(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        ApiError::new(error.status(), "Invalid multipart body").with_error(error.body_text())
    }
}
