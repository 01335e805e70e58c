//! # Fixchain - Variable Fallback-Configuration Engine
//!
//! **Fixchain** normalizes the "what happens when this personalization value is
//! missing" configuration of outreach-campaign variables into a single persisted
//! fix-chain representation, and back again for editing. A chain describes the
//! behavior for one column or variable — send blank, skip the lead, substitute a
//! value, or fetch from the lead's LinkedIn profile — with up to two levels of
//! nested fallback for when the primary behavior itself produces nothing.
//!
//! ## Core Workflow
//!
//! The engine is format-faithful to the campaign payload but operates on a typed
//! internal model. The primary workflow is:
//!
//! 1.  **Decode**: Parse the campaign's `csvConfig` payload with
//!     [`wire::config_from_json`]. Malformed chains degrade to the conservative
//!     skip-the-lead behavior; decoding never fails on chain contents.
//! 2.  **Classify**: When a configuration dialog opens for a variable, use
//!     [`editor::determine_fallback_mode`] to pick the dialog mode from the
//!     variable's origin and any stored fix.
//! 3.  **Normalize**: Turn the stored chain into flat editing state with
//!     [`editor::parse_fix_chain`].
//! 4.  **Validate and build**: Gate the edited state with
//!     [`editor::validate_fallback_state`], then convert it back into a chain
//!     with [`editor::build_fix_chain`] and store it through [`store::ConfigStore`].
//! 5.  **Encode**: Serialize the configuration back into the campaign payload
//!     with [`wire::config_to_json`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fixchain::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Decode the campaign's persisted csv-config payload.
//!     let payload = std::fs::read_to_string("csv_config.json")?;
//!     let config = fixchain::wire::config_from_json(&payload)?;
//!
//!     // 2. A dialog opens for the CSV column "company_name".
//!     let existing = config.get("company_name").map(|fix| &fix.chain);
//!     let mode = determine_fallback_mode(VariableKind::Csv, existing);
//!
//!     // 3. Normalize the stored chain into editing state.
//!     let mut state = parse_fix_chain(mode, existing);
//!
//!     // The user picks a LinkedIn lookup with a substitution fallback.
//!     state.mode = StateMode::FetchLinkedIn;
//!     state.linkedin_field = Some(LinkedInField::Company);
//!     state.fallback_mode = Some(StateMode::InsertValue);
//!     state.fallback_default_value = "their company".to_string();
//!
//!     // 4. Validate, build, and store.
//!     let validation = validate_fallback_state(mode, &state);
//!     assert!(validation.is_valid);
//!
//!     let mut store = ConfigStore::new(config);
//!     store.add_column_fix("company_name", build_fix_chain(mode, &state));
//!
//!     // 5. Encode the updated configuration for persistence.
//!     let updated = fixchain::wire::config_to_json(store.config())?;
//!     println!("{updated}");
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod chain;
pub mod editor;
pub mod error;
pub mod prelude;
pub mod store;
pub mod wire;

#[cfg(feature = "python-bindings")]
mod python;
