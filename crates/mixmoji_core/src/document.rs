//! Metadata document model.
//!
//! Mirrors the upstream emoji-combination metadata JSON. Unknown fields are
//! tolerated everywhere so upstream schema additions never break parsing.

use mixmoji_error::{JsonError, MixmojiResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One pre-rendered combination image for a pair of emoji.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    /// URL of the pre-rendered image asset
    #[serde(rename = "gStaticUrl")]
    pub g_static_url: String,
    /// Whether this is the latest rendering for the pair
    #[serde(rename = "isLatest", default)]
    pub is_latest: bool,
    /// Remaining descriptive fields, carried through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// All known combination images for one base emoji, keyed by partner
/// codepoint string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmojiEntry {
    /// Partner codepoint string to the orderings of renderings for that pair
    #[serde(default)]
    pub combinations: HashMap<String, Vec<Combination>>,
}

impl EmojiEntry {
    /// Select the combination to serve for a partner codepoint.
    ///
    /// At most one entry in a list should be flagged latest; the first
    /// flagged entry wins, falling back to the first element.
    pub fn combination(&self, partner: &str) -> Option<&Combination> {
        let list = self.combinations.get(partner)?;
        list.iter().find(|c| c.is_latest).or_else(|| list.first())
    }
}

/// Parsed emoji-combination metadata document.
///
/// Immutable once loaded; refresh replaces the whole document rather than
/// merging into it.
///
/// # Examples
///
/// ```
/// use mixmoji_core::MetadataDocument;
///
/// let doc = MetadataDocument::from_slice(br#"{
///     "knownSupportedEmoji": ["1f600"],
///     "data": {"1f600": {"combinations": {}}}
/// }"#).unwrap();
/// assert_eq!(doc.known_supported_emoji, vec!["1f600"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument {
    /// Ordered list of base emoji the upstream feed covers
    #[serde(rename = "knownSupportedEmoji", default)]
    pub known_supported_emoji: Vec<String>,
    /// Base codepoint string to its combination entry
    #[serde(default)]
    pub data: HashMap<String, EmojiEntry>,
}

impl MetadataDocument {
    /// Parse a metadata document from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns a `JsonError` when the bytes are not a valid document.
    pub fn from_slice(bytes: &[u8]) -> MixmojiResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| JsonError::new(format!("Failed to parse metadata document: {}", e)).into())
    }

    /// Look up the combination entry for a base codepoint string.
    pub fn entry(&self, codepoint: &str) -> Option<&EmojiEntry> {
        self.data.get(codepoint)
    }
}
