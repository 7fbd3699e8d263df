//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::config::Config;
use crate::core::models::RequiredPercentage;
use crate::core::services::{self, FieldFeedback};
use crate::output::{EvaluationResult, OptionsResult};

use super::error::ApiError;
use super::types::{EvaluateRequest, FieldValue, ValidateRequest};

// =============================================================================
// EVALUATION
// =============================================================================

/// Validate, classify and render one submission
pub fn evaluate(req: &EvaluateRequest, config: &Config) -> Result<EvaluationResult, ApiError> {
    // The form sends "" until the options list has loaded
    let requested = req
        .required
        .as_ref()
        .map(FieldValue::as_raw)
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| raw.parse::<RequiredPercentage>())
        .transpose()?;
    let required = config.resolve_required(requested)?;

    let assessment =
        services::evaluate(&req.present.as_raw(), &req.total.as_raw(), required)?;
    Ok(EvaluationResult::from(&assessment))
}

/// Highlighting state for partially entered fields
#[must_use]
pub fn validate_live(req: &ValidateRequest) -> FieldFeedback {
    services::validate_live(&req.present.as_raw(), &req.total.as_raw())
}

// =============================================================================
// OPTIONS
// =============================================================================

/// List the offered percentages
#[must_use]
pub fn list_options(config: &Config) -> OptionsResult {
    OptionsResult {
        options: config.calculator.options.clone(),
        default: config.calculator.default_required,
    }
}
