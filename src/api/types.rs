//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// A form field as sent by a client: JSON number or raw text
///
/// Browsers send whatever was typed, so text is passed through to the
/// validator untouched rather than rejected at the JSON layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer JSON number
    Integer(i64),
    /// Non-integer JSON number
    Float(f64),
    /// Raw text
    Text(String),
}

impl FieldValue {
    /// The value as the validator sees it
    #[must_use]
    pub fn as_raw(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Request body for evaluating attendance
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Classes attended
    #[serde(default)]
    pub present: FieldValue,
    /// Classes held
    #[serde(default)]
    pub total: FieldValue,
    /// Required percentage (configured default when absent)
    #[serde(default)]
    pub required: Option<FieldValue>,
}

/// Request body for live field validation
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// Present field contents so far
    #[serde(default)]
    pub present: FieldValue,
    /// Total field contents so far
    #[serde(default)]
    pub total: FieldValue,
}
