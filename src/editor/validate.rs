use super::mode::FallbackMode;
use super::state::{FallbackState, StateMode};
use serde::Serialize;

/// Outcome of checking an editing state before save. Surfaced by the UI as
/// a disabled save affordance plus an inline message; never an error value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub is_valid: bool,
    pub error: Option<&'static str>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn fail(message: &'static str) -> Self {
        Self {
            is_valid: false,
            error: Some(message),
        }
    }
}

/// The authoritative completeness gate before persisting.
///
/// Stateless and total. Rules are checked independently, in order, and the
/// first failure wins. `build_fix_chain` deliberately does not enforce any
/// of this, so a caller that skips validation can persist an
/// `insertDefaultValue` fix with an empty value.
pub fn validate_fallback_state(_mode: FallbackMode, state: &FallbackState) -> Validation {
    if state.mode == StateMode::InsertValue && state.default_value.trim().is_empty() {
        return Validation::fail("Default value is required when using 'Insert Value' mode");
    }
    if state.mode == StateMode::FetchLinkedIn && state.linkedin_field.is_none() {
        return Validation::fail("LinkedIn field is required when using 'Fetch from LinkedIn' mode");
    }
    if state.fallback_mode == Some(StateMode::InsertValue)
        && state.fallback_default_value.trim().is_empty()
    {
        return Validation::fail(
            "Fallback default value is required when using 'Insert Value' fallback",
        );
    }
    Validation::ok()
}
