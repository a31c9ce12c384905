//! Error handling module for the articles API.
//!
//! Provides centralized error types with mapping to HTTP status codes and the
//! `{"message": ...}` response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Prefix carried by every message the API returns.
pub const MESSAGE_PREFIX: &str = "api.thedp.com";

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const STARTUP_FAILURE: &str = "STARTUP_FAILURE";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const UNKNOWN_TENANT: &str = "UNKNOWN_TENANT";
    pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
    pub const UNREACHABLE: &str = "UNREACHABLE";
}

/// Request parameter violations detected before any store access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `limit` is present but not a non-negative integer
    InvalidLimit,
    /// Neither a filter clause nor a `limit` was given
    LimitRequired,
    /// `sort` is not a supported strategy
    InvalidSort,
    /// `count` path segment of the recent endpoint is not a non-negative integer
    InvalidCount,
}

impl ValidationError {
    pub fn message(&self) -> String {
        let detail = match self {
            ValidationError::InvalidLimit => "Invalid limit. Must be int",
            ValidationError::LimitRequired => {
                "If no filter parameters are specified, limit must be specified"
            }
            ValidationError::InvalidSort => "Invalid sorting strategy. Options are 'popular'",
            ValidationError::InvalidCount => "Invalid count",
        };
        format!("{}: {}", MESSAGE_PREFIX, detail)
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing credentials or unconnectable tenant at boot
    Startup(String),
    /// Malformed or missing request parameters
    Validation(ValidationError),
    /// Path names a tenant that is not configured
    UnknownTenant(String),
    /// Query execution failed or timed out
    StoreUnavailable(String),
    /// Health ping of the named tenant failed
    Unreachable(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Startup(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownTenant(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Startup(_) => codes::STARTUP_FAILURE,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::UnknownTenant(_) => codes::UNKNOWN_TENANT,
            AppError::StoreUnavailable(_) => codes::STORE_UNAVAILABLE,
            AppError::Unreachable(_) => codes::UNREACHABLE,
        }
    }

    /// Get the client-facing message. Store details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            AppError::Startup(msg) => msg.clone(),
            AppError::Validation(kind) => kind.message(),
            AppError::UnknownTenant(tenant) => {
                format!("{}: Unknown publication '{}'", MESSAGE_PREFIX, tenant)
            }
            AppError::StoreUnavailable(_) => {
                format!("{}: Error retrieving articles", MESSAGE_PREFIX)
            }
            AppError::Unreachable(tenant) => format!("{}: unreachable", tenant),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::StoreUnavailable(detail) => {
                write!(f, "{}: {}", self.error_code(), detail)
            }
            _ => write!(f, "{}: {}", self.error_code(), self.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(kind: ValidationError) -> Self {
        AppError::Validation(kind)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::StoreUnavailable(format!("Database error: {}", err))
    }
}

/// Body of every non-array response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = MessageResponse::new(self.message());
        (status, Json(body)).into_response()
    }
}
