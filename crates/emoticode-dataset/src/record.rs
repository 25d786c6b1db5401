//! Dataset records and their encodings.
//!
//! A dataset is an array of [`EmojiRecord`]s, stored either as JSON (human
//! edited) or CBOR (compact bundles shipped with an app).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DatasetError;

/// One emoji in a dataset.
///
/// Field aliases accept the spellings used by common emoji datasets
/// (`shortcode`/`glyph`/`keywords`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Canonical shortcode, without colons.
    #[serde(alias = "shortcode")]
    pub name: String,
    /// Glyph substituted for the shortcode.
    #[serde(alias = "glyph")]
    pub code: String,
    /// Alternate names resolving to the same glyph.
    #[serde(default, alias = "keywords", skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

impl EmojiRecord {
    /// Record without synonyms.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self { name: name.into(), code: code.into(), synonyms: Vec::new() }
    }

    /// Add synonyms to the record.
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }
}

/// On-disk encoding of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON array of records.
    Json,
    /// CBOR array of records.
    Cbor,
}

impl Format {
    /// Infer the format from a file extension (`.json` or `.cbor`).
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "cbor" => Ok(Self::Cbor),
            _ => Err(DatasetError::UnknownFormat(path.display().to_string())),
        }
    }

    /// Decode a record array.
    pub fn decode(self, bytes: &[u8]) -> Result<Vec<EmojiRecord>, DatasetError> {
        match self {
            Self::Json => Ok(serde_json::from_slice(bytes)?),
            Self::Cbor => {
                ciborium::from_reader(bytes).map_err(|e| DatasetError::Cbor(e.to_string()))
            },
        }
    }

    /// Encode a record array.
    pub fn encode(self, records: &[EmojiRecord]) -> Result<Vec<u8>, DatasetError> {
        match self {
            Self::Json => {
                serde_json::to_vec_pretty(records).map_err(|e| DatasetError::Encode(e.to_string()))
            },
            Self::Cbor => {
                let mut buf = Vec::new();
                ciborium::into_writer(records, &mut buf)
                    .map_err(|e| DatasetError::Encode(e.to_string()))?;
                Ok(buf)
            },
        }
    }
}
