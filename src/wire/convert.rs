use super::types::{RawColumnFix, RawCsvConfig, RawFixChain};
use crate::chain::{CoveredFallback, FixChain, LinkedInField, TerminalFix};
use crate::error::ConfigCodecError;
use crate::store::{ColumnFix, CsvConfig};

const SEND_BLANK: &str = "sendBlank";
const SKIP_LEADS: &str = "skipLeads";
const INSERT_DEFAULT_VALUE: &str = "insertDefaultValue";
const FETCH_FROM_LINKEDIN: &str = "fetchFromLinkedIn";
const ALL_LEADS_PRESENT: &str = "allLeadsPresent";

/// Decodes a raw persisted record into the typed model. Never fails.
///
/// Degradations: an unknown or missing `fixType` resolves to `SkipLeads`; a
/// LinkedIn lookup without a recognizable `sourceField` resolves to
/// `SkipLeads`; a full-coverage marker without a `fallback` keeps the
/// marker but covers `SkipLeads`. Nested records degrade by the same rules
/// one level down.
pub fn decode_fix_chain(raw: &RawFixChain) -> FixChain {
    match raw.fix_type.as_deref() {
        Some(SEND_BLANK) => FixChain::SendBlank,
        Some(INSERT_DEFAULT_VALUE) => FixChain::InsertDefaultValue {
            value: raw.default_value.clone().unwrap_or_default(),
        },
        Some(FETCH_FROM_LINKEDIN) => match decode_source(raw) {
            Some(source) => FixChain::FetchFromLinkedIn {
                source,
                fallback: raw.fallback.as_deref().map(decode_terminal),
            },
            None => FixChain::SkipLeads,
        },
        Some(ALL_LEADS_PRESENT) => FixChain::AllLeadsPresent {
            fallback: raw
                .fallback
                .as_deref()
                .map(decode_covered)
                .unwrap_or(CoveredFallback::SkipLeads),
        },
        _ => FixChain::SkipLeads,
    }
}

fn decode_covered(raw: &RawFixChain) -> CoveredFallback {
    match raw.fix_type.as_deref() {
        Some(SEND_BLANK) => CoveredFallback::SendBlank,
        Some(INSERT_DEFAULT_VALUE) => CoveredFallback::InsertDefaultValue {
            value: raw.default_value.clone().unwrap_or_default(),
        },
        Some(FETCH_FROM_LINKEDIN) => match decode_source(raw) {
            Some(source) => CoveredFallback::FetchFromLinkedIn {
                source,
                fallback: raw.fallback.as_deref().map(decode_terminal),
            },
            None => CoveredFallback::SkipLeads,
        },
        _ => CoveredFallback::SkipLeads,
    }
}

fn decode_terminal(raw: &RawFixChain) -> TerminalFix {
    match raw.fix_type.as_deref() {
        Some(SEND_BLANK) => TerminalFix::SendBlank,
        Some(INSERT_DEFAULT_VALUE) => TerminalFix::InsertDefaultValue {
            value: raw.default_value.clone().unwrap_or_default(),
        },
        _ => TerminalFix::SkipLeads,
    }
}

fn decode_source(raw: &RawFixChain) -> Option<LinkedInField> {
    raw.source_field
        .as_deref()
        .and_then(LinkedInField::parse)
}

/// Encodes a typed chain back into the persisted shape. Empty replacement
/// values are left off the wire, matching what the dialog writes when no
/// value was entered.
pub fn encode_fix_chain(chain: &FixChain) -> RawFixChain {
    match chain {
        FixChain::SendBlank => tag(SEND_BLANK),
        FixChain::SkipLeads => tag(SKIP_LEADS),
        FixChain::InsertDefaultValue { value } => insert_tag(value),
        FixChain::FetchFromLinkedIn { source, fallback } => RawFixChain {
            fix_type: Some(FETCH_FROM_LINKEDIN.to_string()),
            source_field: Some(source.as_str().to_string()),
            fallback: fallback.as_ref().map(|t| Box::new(encode_terminal(t))),
            ..RawFixChain::default()
        },
        FixChain::AllLeadsPresent { fallback } => RawFixChain {
            fix_type: Some(ALL_LEADS_PRESENT.to_string()),
            fallback: Some(Box::new(encode_covered(fallback))),
            ..RawFixChain::default()
        },
    }
}

fn encode_covered(fallback: &CoveredFallback) -> RawFixChain {
    match fallback {
        CoveredFallback::SendBlank => tag(SEND_BLANK),
        CoveredFallback::SkipLeads => tag(SKIP_LEADS),
        CoveredFallback::InsertDefaultValue { value } => insert_tag(value),
        CoveredFallback::FetchFromLinkedIn { source, fallback } => RawFixChain {
            fix_type: Some(FETCH_FROM_LINKEDIN.to_string()),
            source_field: Some(source.as_str().to_string()),
            fallback: fallback.as_ref().map(|t| Box::new(encode_terminal(t))),
            ..RawFixChain::default()
        },
    }
}

fn encode_terminal(terminal: &TerminalFix) -> RawFixChain {
    match terminal {
        TerminalFix::SendBlank => tag(SEND_BLANK),
        TerminalFix::SkipLeads => tag(SKIP_LEADS),
        TerminalFix::InsertDefaultValue { value } => insert_tag(value),
    }
}

fn tag(fix_type: &str) -> RawFixChain {
    RawFixChain {
        fix_type: Some(fix_type.to_string()),
        ..RawFixChain::default()
    }
}

fn insert_tag(value: &str) -> RawFixChain {
    RawFixChain {
        fix_type: Some(INSERT_DEFAULT_VALUE.to_string()),
        default_value: (!value.is_empty()).then(|| value.to_string()),
        ..RawFixChain::default()
    }
}

/// Decodes a raw campaign payload into the typed configuration.
pub fn decode_csv_config(raw: &RawCsvConfig) -> CsvConfig {
    CsvConfig {
        column_fixes: raw
            .column_fixes
            .iter()
            .map(|fix| ColumnFix {
                column_name: fix.column_name.clone(),
                chain: decode_fix_chain(&fix.chain),
            })
            .collect(),
        detected_columns: raw.detected_columns.clone(),
        last_updated: raw.last_updated,
    }
}

/// Encodes a typed configuration back into the campaign payload shape.
pub fn encode_csv_config(config: &CsvConfig) -> RawCsvConfig {
    RawCsvConfig {
        column_fixes: config
            .column_fixes
            .iter()
            .map(|fix| RawColumnFix {
                column_name: fix.column_name.clone(),
                chain: encode_fix_chain(&fix.chain),
            })
            .collect(),
        detected_columns: config.detected_columns.clone(),
        last_updated: config.last_updated,
    }
}

/// Parses a campaign `csvConfig` JSON document into the typed
/// configuration. Malformed chains inside a well-formed document degrade;
/// only unparseable JSON itself is an error.
pub fn config_from_json(json: &str) -> Result<CsvConfig, ConfigCodecError> {
    let raw: RawCsvConfig =
        serde_json::from_str(json).map_err(|e| ConfigCodecError::Parse(e.to_string()))?;
    Ok(decode_csv_config(&raw))
}

/// Serializes the typed configuration as the campaign `csvConfig` JSON
/// document.
pub fn config_to_json(config: &CsvConfig) -> Result<String, ConfigCodecError> {
    serde_json::to_string(&encode_csv_config(config))
        .map_err(|e| ConfigCodecError::Serialize(e.to_string()))
}
