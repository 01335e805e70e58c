use crate::catalog::VariableKind;
use crate::chain::FixChain;

/// Which configuration dialog applies to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMode {
    /// LinkedIn-sourced variables always get the reduced three-option dialog.
    LinkedIn,
    /// Every lead currently has this value; the dialog configures what
    /// happens if that stops being true.
    AllLeadsPresent,
    /// CSV and API variables with an ordinary fix, or none yet.
    Custom,
}

/// Decides which dialog mode applies to a variable, given its origin and
/// the fix already stored for it (if any).
///
/// Total: every combination maps to a mode. A `linkedin` origin
/// short-circuits regardless of any stored fix.
pub fn determine_fallback_mode(kind: VariableKind, existing: Option<&FixChain>) -> FallbackMode {
    if kind == VariableKind::LinkedIn {
        return FallbackMode::LinkedIn;
    }
    match existing {
        Some(chain) if chain.is_all_leads_present() => FallbackMode::AllLeadsPresent,
        _ => FallbackMode::Custom,
    }
}
