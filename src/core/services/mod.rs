//! Services for bunkcalc
//!
//! The evaluation pipeline, one stage per module:
//!
//! - [`validator`] - raw input to [`AttendanceRequest`]
//! - [`classifier`] - [`AttendanceRequest`] to [`Assessment`]
//! - [`presenter`] - [`Assessment`] to [`Report`]
//! - [`live`] - field highlighting while typing
//!
//! [`AttendanceRequest`]: crate::core::models::AttendanceRequest
//! [`Assessment`]: crate::core::models::Assessment

pub mod classifier;
pub mod live;
pub mod presenter;
pub mod validator;

pub use classifier::classify;
pub use live::{FieldFeedback, validate_live};
pub use presenter::{Report, present, present_error};
pub use validator::{ensure_offered, parse_count, validate, validate_counts};

use crate::core::error::ValidationError;
use crate::core::models::{Assessment, RequiredPercentage};

/// Validate and classify raw input in one step
pub fn evaluate(
    present: &str,
    total: &str,
    required: RequiredPercentage,
) -> Result<Assessment, ValidationError> {
    validate(present, total, required).map(|request| classify(&request))
}

/// Run the whole pipeline, rendering failures as error reports
#[must_use]
pub fn evaluate_report(present: &str, total: &str, required: RequiredPercentage) -> Report {
    match evaluate(present, total, required) {
        Ok(assessment) => presenter::present(&assessment),
        Err(e) => present_error(&e),
    }
}
