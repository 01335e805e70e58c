//! Common test utilities for building configs, chains, and editing states.
use fixchain::prelude::*;

/// A well-formed campaign csv-config payload: one LinkedIn lookup with a
/// substitution fallback, one plain skip.
#[allow(dead_code)]
pub const SIMPLE_CONFIG_JSON: &str = r#"{
    "columnFixes": [
        {
            "columnName": "company_name",
            "fixType": "fetchFromLinkedIn",
            "sourceField": "company",
            "fallback": { "fixType": "insertDefaultValue", "defaultValue": "Unknown Co" }
        },
        { "columnName": "icebreaker", "fixType": "skipLeads" }
    ],
    "detectedColumns": ["company_name", "icebreaker", "job_title"],
    "lastUpdated": 1721817600000
}"#;

/// A payload using the full-coverage marker at maximum nesting depth:
/// allLeadsPresent -> fetchFromLinkedIn -> sendBlank.
#[allow(dead_code)]
pub const COVERED_CONFIG_JSON: &str = r#"{
    "columnFixes": [
        {
            "columnName": "job_title",
            "fixType": "allLeadsPresent",
            "fallback": {
                "fixType": "fetchFromLinkedIn",
                "sourceField": "title",
                "fallback": { "fixType": "sendBlank" }
            }
        }
    ],
    "detectedColumns": ["job_title"]
}"#;

/// A payload full of records that must degrade rather than fail: an unknown
/// tag, a lookup without a usable source field, and a bare full-coverage
/// marker.
#[allow(dead_code)]
pub const MALFORMED_CONFIG_JSON: &str = r#"{
    "columnFixes": [
        { "columnName": "a", "fixType": "doTheImpossible" },
        { "columnName": "b" },
        { "columnName": "c", "fixType": "fetchFromLinkedIn" },
        { "columnName": "d", "fixType": "fetchFromLinkedIn", "sourceField": "shoeSize" },
        { "columnName": "e", "fixType": "allLeadsPresent" }
    ],
    "detectedColumns": []
}"#;

/// Editing state for a LinkedIn lookup with an insert-value fallback.
#[allow(dead_code)]
pub fn fetch_with_insert_fallback(field: LinkedInField, value: &str) -> FallbackState {
    let mut state = FallbackState::fetch(field);
    state.fallback_mode = Some(StateMode::InsertValue);
    state.fallback_default_value = value.to_string();
    state
}

/// The chain the simple fixture stores for `company_name`.
#[allow(dead_code)]
pub fn company_lookup_chain() -> FixChain {
    FixChain::FetchFromLinkedIn {
        source: LinkedInField::Company,
        fallback: Some(TerminalFix::InsertDefaultValue {
            value: "Unknown Co".to_string(),
        }),
    }
}

/// A config with a couple of fixes already stored, for store tests.
#[allow(dead_code)]
pub fn seeded_config() -> CsvConfig {
    let mut config = CsvConfig::new();
    config.add_or_update(ColumnFix::new("first_name", FixChain::SendBlank));
    config.add_or_update(ColumnFix::new("company_name", company_lookup_chain()));
    config
}
