//! API error handling.
//!
//! Every failure leaves the API as the JSON envelope
//! `{ "success": false, "message": ..., "details": [...] }`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domain::error::DomainError;
use crate::error::Error;

/// Field-level error for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the request field, as the client spells it.
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// API error response containing status code and error body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            error: ApiError {
                success: false,
                message: message.into(),
                details: None,
            },
        }
    }

    /// Creates a 400 Bad Request response.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 400 Bad Request response with field-level details.
    #[must_use]
    pub fn validation_error(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        let mut response = Self::bad_request(message);
        response.error.details = Some(details);
        response
    }

    /// Creates a 404 Not Found response.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error response.
    ///
    /// The cause is logged, never sent to the client.
    #[must_use]
    pub fn internal_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DomainError> for ApiErrorResponse {
    fn from(err: DomainError) -> Self {
        let message = match &err {
            DomainError::NotBookable => "Property not available for booking",
            DomainError::UnknownProperty { .. } => "Property not found",
            DomainError::MissingField { .. } => "Missing required information",
            DomainError::InvalidFilter { .. } => "Invalid search parameters",
            _ => "Validation failed",
        };
        match err.field() {
            Some(field) => Self::validation_error(message, vec![FieldError::new(field, err.to_string())]),
            None => Self::bad_request(message),
        }
    }
}

impl From<Error> for ApiErrorResponse {
    fn from(err: Error) -> Self {
        match err {
            Error::Domain(err) => err.into(),
            Error::NotFound { entity, .. } => Self::not_found(format!("{} not found", capitalize(entity))),
            Error::Config(_)
            | Error::Json(_)
            | Error::Io(_)
            | Error::Connection(_)
            | Error::Database(_)
            | Error::Parse(_) => {
                error!(error = %err, "Request failed");
                Self::internal_error()
            }
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation_error(
            "Invalid request body",
            vec![FieldError::new("body", rejection.body_text())],
        )
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation_error(
            "Invalid query string",
            vec![FieldError::new("query", rejection.body_text())],
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
