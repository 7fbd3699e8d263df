//! API errors and their HTTP mapping
//!
//! Validation failures surface as `BAD_REQUEST` carrying the same sentence
//! the form and CLI show, so clients can display `message` verbatim.

use serde::Serialize;
use thiserror::Error;

use crate::core::ValidationError;

/// Machine-readable failure class, one per HTTP status the API emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown endpoint (404)
    NotFound,
    /// Malformed JSON or rejected input (400)
    BadRequest,
    /// Response could not be produced (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }

    /// Wire name used in the `error.code` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// A failed API call
#[derive(Debug, Clone, Error)]
#[error("{}: {message}", .code.as_str())]
pub struct ApiError {
    /// Failure class
    pub code: ErrorCode,
    /// Text suitable for showing to the user
    pub message: String,
}

impl ApiError {
    const fn new(code: ErrorCode, message: String) -> Self {
        Self { code, message }
    }

    /// Unknown endpoint
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message.into())
    }

    /// Input the calculator cannot evaluate
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message.into())
    }

    /// Server-side failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message.into())
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

/// The `error` object of a failed response
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Wire name of the [`ErrorCode`]
    pub code: String,
    /// User-facing message
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
