//! Typed error handling for the clientele service
//!
//! This module provides the error hierarchy shared by the REST surface and
//! the form layer, so callers can handle failures specifically rather than
//! dealing with generic `anyhow::Error` types.
//!
//! # Error Categories
//!
//! - [`RecordError`]: errors related to client record operations (CRUD)
//! - [`ValidationError`]: errors related to payload validation
//! - [`StorageError`]: errors related to the backing store
//! - [`RequestError`]: errors raised by the form layer's HTTP round trips
//!
//! The HTTP surface renders any [`ClienteleError`] as an [`ErrorResponse`]
//! body with the error's status code, defaulting to 500 for anything
//! unclassified.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::client::ClientId;

/// The main error type for the clientele service
#[derive(Debug)]
pub enum ClienteleError {
    /// Client record errors (CRUD operations)
    Record(RecordError),

    /// Payload validation errors
    Validation(ValidationError),

    /// Storage backend errors
    Storage(StorageError),

    /// HTTP round-trip errors from the form layer
    Request(RequestError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ClienteleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClienteleError::Record(e) => write!(f, "{}", e),
            ClienteleError::Validation(e) => write!(f, "{}", e),
            ClienteleError::Storage(e) => write!(f, "{}", e),
            ClienteleError::Request(e) => write!(f, "{}", e),
            ClienteleError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ClienteleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClienteleError::Record(e) => Some(e),
            ClienteleError::Validation(e) => Some(e),
            ClienteleError::Storage(e) => Some(e),
            ClienteleError::Request(e) => Some(e),
            ClienteleError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ClienteleError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClienteleError::Record(e) => e.status_code(),
            ClienteleError::Validation(_) => StatusCode::BAD_REQUEST,
            ClienteleError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ClienteleError::Request(e) => e.status_code(),
            ClienteleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ClienteleError::Record(e) => e.error_code(),
            ClienteleError::Validation(_) => "VALIDATION_ERROR",
            ClienteleError::Storage(_) => "STORAGE_ERROR",
            ClienteleError::Request(e) => e.error_code(),
            ClienteleError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ClienteleError::Record(RecordError::NotFound { id }) => Some(serde_json::json!({
                "client_id": id.as_str(),
            })),
            ClienteleError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ClienteleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to client record operations
#[derive(Debug)]
pub enum RecordError {
    /// No record is stored under the given identifier
    NotFound { id: ClientId },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NotFound { id } => {
                write!(f, "client with id '{}' not found", id)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl RecordError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "CLIENT_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Errors related to payload validation
#[derive(Debug)]
pub enum ValidationError {
    /// One or more fields failed validation
    FieldErrors(Vec<FieldValidationError>),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let summary: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "validation failed: {}", summary.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the backing store
#[derive(Debug)]
pub enum StorageError {
    /// A lock guarding shared state was poisoned
    LockPoisoned { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { message } => {
                write!(f, "storage lock poisoned: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// =============================================================================
// Request Errors (form-layer HTTP round trips)
// =============================================================================

/// Errors raised by the form layer when talking to the REST surface or the
/// external currency catalog
///
/// The two variants deliberately mirror the failure taxonomy of the form
/// workflow: an application-level rejection carries the server's response
/// body verbatim, a transport failure carries only a generic description.
#[derive(Debug)]
pub enum RequestError {
    /// The server answered with a non-ok status; `body` is the raw response
    /// text, surfaced to the user verbatim
    Rejected { status: u16, body: String },

    /// No usable response was received (connect, timeout, or decode failure)
    Transport { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Rejected { status, body } => {
                write!(f, "request rejected ({}): {}", status, body)
            }
            RequestError::Transport { message } => {
                write!(f, "transport failure: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::Rejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            RequestError::Transport { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::Rejected { .. } => "REQUEST_REJECTED",
            RequestError::Transport { .. } => "REQUEST_TRANSPORT",
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Transport {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<RecordError> for ClienteleError {
    fn from(err: RecordError) -> Self {
        ClienteleError::Record(err)
    }
}

impl From<ValidationError> for ClienteleError {
    fn from(err: ValidationError) -> Self {
        ClienteleError::Validation(err)
    }
}

impl From<StorageError> for ClienteleError {
    fn from(err: StorageError) -> Self {
        ClienteleError::Storage(err)
    }
}

impl From<RequestError> for ClienteleError {
    fn from(err: RequestError) -> Self {
        ClienteleError::Request(err)
    }
}
