use thiserror::Error;

/// Errors that can occur when parsing or serializing the persisted campaign
/// payload. Malformed fix chains inside a parseable document are not errors:
/// they degrade to the skip-the-lead behavior at decode time.
#[derive(Error, Debug, Clone)]
pub enum ConfigCodecError {
    #[error("Failed to parse csv-config JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize csv-config JSON: {0}")]
    Serialize(String),
}

/// Errors from reading or writing locally cached config snapshots.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Snapshot file '{path}' could not be accessed: {message}")]
    Io { path: String, message: String },

    #[error("Snapshot serialization failed: {0}")]
    Encode(String),

    #[error("Snapshot deserialization failed: {0}")]
    Decode(String),
}

/// Errors that can occur when registering variables in the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Variable name cannot be empty")]
    EmptyName,

    #[error("Variable name '{0}' may only contain letters, digits, and underscores")]
    InvalidName(String),

    #[error("A variable named '{0}' already exists")]
    DuplicateName(String),
}
