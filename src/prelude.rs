//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the fixchain
//! crate so callers can bring the whole editing surface into scope with a
//! single import.

// The editing engine
pub use crate::editor::{
    FallbackMode, FallbackState, StateMode, Validation, build_fix_chain, determine_fallback_mode,
    parse_fix_chain, validate_fallback_state,
};

// The chain model
pub use crate::chain::{CoveredFallback, FixChain, LinkedInField, TerminalFix};

// Catalog and store
pub use crate::catalog::{Variable, VariableCatalog, VariableKind};
pub use crate::store::{ColumnFix, ConfigSnapshot, ConfigStore, CsvConfig};

// Wire shapes
pub use crate::wire::{RawColumnFix, RawCsvConfig, RawFixChain};

// Error types
pub use crate::error::{ArtifactError, CatalogError, ConfigCodecError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
