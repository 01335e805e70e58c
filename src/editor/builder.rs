use super::mode::FallbackMode;
use super::state::{FallbackState, StateMode};
use crate::chain::{CoveredFallback, FixChain, TerminalFix};

/// Converts dialog state into the chain that gets persisted.
///
/// Pure and total: every state maps to a chain, and anything unrecognized
/// or incomplete resolves to skipping the lead. Completeness (non-empty
/// values, a selected lookup field) is `validate_fallback_state`'s job, not
/// this function's — callers must validate before persisting, or an
/// `insertDefaultValue` fix with an empty value can reach storage.
pub fn build_fix_chain(mode: FallbackMode, state: &FallbackState) -> FixChain {
    match mode {
        FallbackMode::LinkedIn => build_reduced(state),
        FallbackMode::Custom => build_custom(state),
        FallbackMode::AllLeadsPresent => FixChain::AllLeadsPresent {
            fallback: build_covered(state),
        },
    }
}

/// The reduced dialog for LinkedIn-sourced variables: insert, send blank,
/// or skip. No lookup option since the variable already comes from a
/// LinkedIn lookup.
fn build_reduced(state: &FallbackState) -> FixChain {
    match state.mode {
        StateMode::InsertValue if !state.default_value.is_empty() => FixChain::InsertDefaultValue {
            value: state.default_value.clone(),
        },
        StateMode::SendBlank => FixChain::SendBlank,
        _ => FixChain::SkipLeads,
    }
}

fn build_custom(state: &FallbackState) -> FixChain {
    match state.mode {
        StateMode::FetchLinkedIn => match state.linkedin_field {
            Some(source) => FixChain::FetchFromLinkedIn {
                source,
                fallback: state
                    .fallback_mode
                    .map(|m| build_terminal(m, &state.fallback_default_value)),
            },
            None => FixChain::SkipLeads,
        },
        StateMode::InsertValue if !state.default_value.is_empty() => FixChain::InsertDefaultValue {
            value: state.default_value.clone(),
        },
        StateMode::SendBlank => FixChain::SendBlank,
        _ => FixChain::SkipLeads,
    }
}

/// The full-coverage encoding: the user's primary choice is stored entirely
/// inside the fallback slot, never as the chain's own type. The outer
/// `allLeadsPresent` marker distinguishes "currently fully covered"
/// variables from normally-configured ones.
///
/// The insert branch attaches whatever value the state carries, including
/// an empty one; enforcement stays in the validator.
fn build_covered(state: &FallbackState) -> CoveredFallback {
    match state.mode {
        StateMode::InsertValue => CoveredFallback::InsertDefaultValue {
            value: state.default_value.clone(),
        },
        StateMode::SendBlank => CoveredFallback::SendBlank,
        StateMode::FetchLinkedIn => match state.linkedin_field {
            Some(source) => CoveredFallback::FetchFromLinkedIn {
                source,
                fallback: state
                    .fallback_mode
                    .map(|m| build_terminal(m, &state.fallback_default_value)),
            },
            None => CoveredFallback::SkipLeads,
        },
        StateMode::SkipLead => CoveredFallback::SkipLeads,
    }
}

/// The three-way mapping shared by every fallback slot: insert a value,
/// send blank, or (for anything else) skip the lead.
fn build_terminal(mode: StateMode, value: &str) -> TerminalFix {
    match mode {
        StateMode::InsertValue => TerminalFix::InsertDefaultValue {
            value: value.to_string(),
        },
        StateMode::SendBlank => TerminalFix::SendBlank,
        _ => TerminalFix::SkipLeads,
    }
}
