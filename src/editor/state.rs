use crate::chain::LinkedInField;
use serde::{Deserialize, Serialize};

/// The primary choice a user makes in the configuration dialog.
///
/// Also used for the secondary "what if the LinkedIn lookup fails too"
/// choice; in that position `FetchLinkedIn` is not offered by the UI and
/// resolves to skipping the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateMode {
    InsertValue,
    FetchLinkedIn,
    SendBlank,
    SkipLead,
}

/// Flat, dialog-lifetime editing state derived from exactly one `FixChain`.
///
/// Lives only while a configuration dialog is open and is discarded on
/// close or cancel; it is never persisted alongside the chain it came from.
/// Value fields use the empty string for "not entered" since every decision
/// point treats the two identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackState {
    pub mode: StateMode,
    pub default_value: String,
    pub linkedin_field: Option<LinkedInField>,
    pub fallback_mode: Option<StateMode>,
    pub fallback_default_value: String,
}

impl Default for FallbackState {
    /// The universal "not yet configured" state: skip the lead.
    fn default() -> Self {
        Self {
            mode: StateMode::SkipLead,
            default_value: String::new(),
            linkedin_field: None,
            fallback_mode: None,
            fallback_default_value: String::new(),
        }
    }
}

impl FallbackState {
    /// State for a plain primary choice with no values attached.
    pub fn with_mode(mode: StateMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// State for substituting a fixed value.
    pub fn insert_value(value: impl Into<String>) -> Self {
        Self {
            mode: StateMode::InsertValue,
            default_value: value.into(),
            ..Self::default()
        }
    }

    /// State for a LinkedIn lookup without a secondary behavior.
    pub fn fetch(field: LinkedInField) -> Self {
        Self {
            mode: StateMode::FetchLinkedIn,
            linkedin_field: Some(field),
            ..Self::default()
        }
    }
}
