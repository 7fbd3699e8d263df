//! Calc command - evaluate attendance once

use bunkcalc::config::Config;
use bunkcalc::core::ValidationError;
use bunkcalc::core::models::RequiredPercentage;
use bunkcalc::core::services;
use bunkcalc::output::{EvaluationResult, OperationResult, OutputMode};

/// Evaluate one set of inputs and print the result
///
/// Invalid input is reported and the process exits with status 1.
/// Every classification, good news or bad, exits 0.
#[allow(clippy::unnecessary_wraps)]
pub fn calc(
    present: &str,
    total: &str,
    required: Option<&str>,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match evaluate(present, total, required, config) {
        Ok(result) => {
            log::debug!("{present}/{total} classified as {:?}", result.classification);
            result.render(mode);
            Ok(())
        },
        Err(e) => {
            OperationResult::failure(services::present_error(&e).text()).render(mode);
            std::process::exit(1);
        },
    }
}

fn evaluate(
    present: &str,
    total: &str,
    required: Option<&str>,
    config: &Config,
) -> Result<EvaluationResult, ValidationError> {
    let requested = required.map(str::parse::<RequiredPercentage>).transpose()?;
    let required = config.resolve_required(requested)?;
    let assessment = services::evaluate(present, total, required)?;
    Ok(EvaluationResult::from(&assessment))
}
