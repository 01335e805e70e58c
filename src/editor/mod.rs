//! The fallback-configuration engine: classification of which dialog mode
//! applies to a variable, normalization of persisted chains into flat
//! editing state, the reverse build back into a chain, and the completeness
//! gate run before saving.
//!
//! Every function here is pure computation over in-memory values. Nothing
//! performs I/O and nothing fails: malformed or partial input resolves to
//! the most conservative behavior (skip the lead) instead of erroring.

pub mod builder;
pub mod mode;
pub mod normalizer;
pub mod state;
pub mod validate;

pub use builder::*;
pub use mode::*;
pub use normalizer::*;
pub use state::*;
pub use validate::*;
