use super::mode::FallbackMode;
use super::state::{FallbackState, StateMode};
use crate::chain::{CoveredFallback, FixChain, TerminalFix};

/// Converts a persisted chain back into flat editing state for the dialog.
///
/// Structural inverse of `build_fix_chain`, with the same deliberate
/// asymmetry: an `allLeadsPresent` chain reports the mode of its inner
/// fallback, never the literal marker — the outer type exists only so the
/// UI can show the full-coverage banner. A missing chain, or a
/// full-coverage chain with nothing usable underneath, normalizes to the
/// skip-lead default.
pub fn parse_fix_chain(mode: FallbackMode, chain: Option<&FixChain>) -> FallbackState {
    let Some(chain) = chain else {
        return FallbackState::default();
    };

    if let FixChain::AllLeadsPresent { fallback } = chain {
        return parse_covered(fallback);
    }

    if mode == FallbackMode::AllLeadsPresent {
        // The dialog expects a covered chain but the stored fix is ordinary;
        // only a fallback slot can supply the primary choice here.
        return match chain {
            FixChain::FetchFromLinkedIn {
                fallback: Some(terminal),
                ..
            } => parse_terminal_as_primary(terminal),
            _ => FallbackState::default(),
        };
    }

    match chain {
        FixChain::SendBlank => FallbackState::with_mode(StateMode::SendBlank),
        FixChain::SkipLeads => FallbackState::default(),
        FixChain::InsertDefaultValue { value } => FallbackState::insert_value(value.clone()),
        FixChain::FetchFromLinkedIn { source, fallback } => {
            let mut state = FallbackState::fetch(*source);
            if let Some(terminal) = fallback {
                let (fallback_mode, fallback_value) = parse_terminal(terminal);
                state.fallback_mode = Some(fallback_mode);
                state.fallback_default_value = fallback_value;
            }
            state
        }
        FixChain::AllLeadsPresent { .. } => FallbackState::default(),
    }
}

fn parse_covered(fallback: &CoveredFallback) -> FallbackState {
    match fallback {
        CoveredFallback::SendBlank => FallbackState::with_mode(StateMode::SendBlank),
        CoveredFallback::SkipLeads => FallbackState::default(),
        CoveredFallback::InsertDefaultValue { value } => FallbackState::insert_value(value.clone()),
        CoveredFallback::FetchFromLinkedIn { source, fallback } => {
            let mut state = FallbackState::fetch(*source);
            if let Some(terminal) = fallback {
                let (fallback_mode, fallback_value) = parse_terminal(terminal);
                state.fallback_mode = Some(fallback_mode);
                state.fallback_default_value = fallback_value;
            }
            state
        }
    }
}

/// Inverse of the shared three-way mapping.
fn parse_terminal(terminal: &TerminalFix) -> (StateMode, String) {
    match terminal {
        TerminalFix::InsertDefaultValue { value } => (StateMode::InsertValue, value.clone()),
        TerminalFix::SendBlank => (StateMode::SendBlank, String::new()),
        TerminalFix::SkipLeads => (StateMode::SkipLead, String::new()),
    }
}

fn parse_terminal_as_primary(terminal: &TerminalFix) -> FallbackState {
    match terminal {
        TerminalFix::InsertDefaultValue { value } => FallbackState::insert_value(value.clone()),
        TerminalFix::SendBlank => FallbackState::with_mode(StateMode::SendBlank),
        TerminalFix::SkipLeads => FallbackState::default(),
    }
}
