use super::config::CsvConfig;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A locally cached snapshot of one campaign's CSV configuration, stored in
/// the bincode format. Lets the editor reopen a campaign without refetching
/// the full payload.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub campaign_id: String,
    pub config: CsvConfig,
}

impl ConfigSnapshot {
    pub fn new(campaign_id: impl Into<String>, config: CsvConfig) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            config,
        }
    }

    /// Saves the snapshot to a file.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the snapshot to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
