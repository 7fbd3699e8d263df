//! Input validation
//!
//! Turns raw present/total values into an [`AttendanceRequest`]. Checks run
//! in a fixed order, each over both fields: well-formed, non-negative,
//! present within total, total non-zero.

use crate::core::error::ValidationError;
use crate::core::models::{AttendanceRequest, RequiredPercentage};

/// Validate raw text input
///
/// Surrounding whitespace is ignored; anything else that is not an integer
/// (including empty input) is `InvalidNumber`.
pub fn validate(
    present: &str,
    total: &str,
    required: RequiredPercentage,
) -> Result<AttendanceRequest, ValidationError> {
    let (Some(present), Some(total)) = (parse_count(present), parse_count(total)) else {
        return Err(ValidationError::InvalidNumber);
    };
    validate_counts(present, total, required)
}

/// Validate already-numeric input
pub fn validate_counts(
    present: i64,
    total: i64,
    required: RequiredPercentage,
) -> Result<AttendanceRequest, ValidationError> {
    if present < 0 || total < 0 {
        return Err(ValidationError::NegativeValue);
    }
    if present > total {
        return Err(ValidationError::PresentExceedsTotal);
    }
    if total == 0 {
        return Err(ValidationError::ZeroTotal);
    }

    // Counts beyond u32 are not something a timetable produces.
    let present = u32::try_from(present).map_err(|_| ValidationError::InvalidNumber)?;
    let total = u32::try_from(total).map_err(|_| ValidationError::InvalidNumber)?;

    Ok(AttendanceRequest::new(present, total, required))
}

/// Parse a single count field, `None` if it is not an integer
#[must_use]
pub fn parse_count(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Check a percentage against the offered options
pub fn ensure_offered(
    required: RequiredPercentage,
    options: &[u8],
) -> Result<RequiredPercentage, ValidationError> {
    if options.contains(&required.get()) {
        return Ok(required);
    }
    Err(ValidationError::UnsupportedPercentage {
        value: required.get(),
        options: options.iter().map(u8::to_string).collect::<Vec<_>>().join(", "),
    })
}
