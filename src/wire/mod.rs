//! The persisted JSON shapes and their conversion to and from the typed
//! model. Raw types mirror the camelCase payload stored with a campaign;
//! decoding is lossy by design, degrading anything malformed to the
//! skip-the-lead behavior instead of failing.

pub mod convert;
pub mod types;

pub use convert::*;
pub use types::*;
