//! Plan validation
//!
//! Validation rules:
//! - input identifiers are non-empty
//! - output identifiers are non-empty
//!
//! Everything else is either a defaulting concern, handled by `resolver`,
//! or an open failure detected at resource acquisition.

use contracts::{TeeError, TeePlan};

/// Validate a TeePlan
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(plan: &TeePlan) -> Result<(), TeeError> {
    for (idx, input) in plan.inputs.iter().enumerate() {
        if input.is_empty() {
            return Err(TeeError::config_validation(
                format!("inputs[{idx}]"),
                "source identifier cannot be empty",
            ));
        }
    }

    for (idx, output) in plan.outputs.iter().enumerate() {
        if output.is_empty() {
            return Err(TeeError::config_validation(
                format!("outputs[{idx}]"),
                "sink identifier cannot be empty",
            ));
        }
    }

    Ok(())
}
