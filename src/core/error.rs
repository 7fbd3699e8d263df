//! Input validation errors
//!
//! Every failure here is a user-input problem; the message is shown to the
//! user as-is and they correct the input and resubmit.

use thiserror::Error;

/// Reasons raw attendance input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A count or percentage is not a well-formed integer
    #[error("Please enter valid numbers for both fields.")]
    InvalidNumber,

    /// A count is below zero
    #[error("Please enter positive numbers only.")]
    NegativeValue,

    /// More classes attended than held
    #[error("Present classes cannot be greater than total classes.")]
    PresentExceedsTotal,

    /// No classes held yet
    #[error("Total classes cannot be zero.")]
    ZeroTotal,

    /// Required percentage outside (0, 100]
    #[error("Required percentage must be between 1 and 100, got {0}.")]
    InvalidPercentage(i64),

    /// Required percentage is valid but not one of the offered options
    #[error("Required percentage {value}% is not one of the available options ({options}).")]
    UnsupportedPercentage {
        /// The rejected value
        value: u8,
        /// Comma-separated list of accepted values
        options: String,
    },
}
