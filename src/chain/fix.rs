use super::field::LinkedInField;
use serde::{Deserialize, Serialize};

/// The persisted missing-data behavior for one personalization variable.
///
/// A chain nests at most twice: chain -> fallback -> fallback. The nesting
/// cap and the "a LinkedIn lookup always names its source field" rule are
/// carried by the type shape itself, so deeper or incomplete chains cannot
/// be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixChain {
    /// Substitute an empty string and send the message anyway.
    SendBlank,
    /// Exclude the lead from the sequence step.
    SkipLeads,
    /// Substitute a fixed replacement value.
    InsertDefaultValue { value: String },
    /// Look the value up on the lead's LinkedIn profile, with an optional
    /// behavior for when the lookup also comes back empty.
    FetchFromLinkedIn {
        source: LinkedInField,
        fallback: Option<TerminalFix>,
    },
    /// Marker for a variable that currently has a value for every lead.
    /// The real behavior lives one level down and only activates if that
    /// coverage ever drops; the UI uses the marker to show an informational
    /// banner instead of the full dialog.
    AllLeadsPresent { fallback: CoveredFallback },
}

/// The behavior stored under an `AllLeadsPresent` marker.
///
/// This is the one position where a LinkedIn lookup may itself carry a
/// further fallback, giving the maximum depth of
/// allLeadsPresent -> fetchFromLinkedIn -> terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoveredFallback {
    SendBlank,
    SkipLeads,
    InsertDefaultValue { value: String },
    FetchFromLinkedIn {
        source: LinkedInField,
        fallback: Option<TerminalFix>,
    },
}

/// The deepest permitted level of a chain. Substitution-only: no further
/// lookup can hang off it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalFix {
    SendBlank,
    SkipLeads,
    InsertDefaultValue { value: String },
}

impl FixChain {
    /// The `fixType` tag this chain persists under.
    pub fn fix_type(&self) -> &'static str {
        match self {
            FixChain::SendBlank => "sendBlank",
            FixChain::SkipLeads => "skipLeads",
            FixChain::InsertDefaultValue { .. } => "insertDefaultValue",
            FixChain::FetchFromLinkedIn { .. } => "fetchFromLinkedIn",
            FixChain::AllLeadsPresent { .. } => "allLeadsPresent",
        }
    }

    /// Whether this chain is the full-coverage marker.
    pub fn is_all_leads_present(&self) -> bool {
        matches!(self, FixChain::AllLeadsPresent { .. })
    }
}

impl CoveredFallback {
    pub fn fix_type(&self) -> &'static str {
        match self {
            CoveredFallback::SendBlank => "sendBlank",
            CoveredFallback::SkipLeads => "skipLeads",
            CoveredFallback::InsertDefaultValue { .. } => "insertDefaultValue",
            CoveredFallback::FetchFromLinkedIn { .. } => "fetchFromLinkedIn",
        }
    }
}

impl TerminalFix {
    pub fn fix_type(&self) -> &'static str {
        match self {
            TerminalFix::SendBlank => "sendBlank",
            TerminalFix::SkipLeads => "skipLeads",
            TerminalFix::InsertDefaultValue { .. } => "insertDefaultValue",
        }
    }
}
