use serde::{Deserialize, Serialize};

/// Persisted shape of one fix chain, as it appears inside the campaign
/// payload. Every field is optional so that malformed records still
/// deserialize; `convert::decode_fix_chain` decides what they degrade to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFixChain {
    #[serde(rename = "fixType", skip_serializing_if = "Option::is_none")]
    pub fix_type: Option<String>,
    #[serde(rename = "defaultValue", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(rename = "sourceField", skip_serializing_if = "Option::is_none")]
    pub source_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Box<RawFixChain>>,
}

/// One configured column inside a campaign's CSV configuration: a fix chain
/// keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawColumnFix {
    #[serde(rename = "columnName")]
    pub column_name: String,
    #[serde(flatten)]
    pub chain: RawFixChain,
}

/// The `csvConfig` payload persisted with a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCsvConfig {
    #[serde(rename = "columnFixes")]
    pub column_fixes: Vec<RawColumnFix>,
    #[serde(rename = "detectedColumns")]
    pub detected_columns: Vec<String>,
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<u64>,
}
