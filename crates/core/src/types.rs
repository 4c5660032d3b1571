//! Record types shared by the reader, collector and service layers.

use serde::Serialize;
use serde_json::Value;

/// One asset record as it appears in a source file.
///
/// The schema is not fixed: different files spell the same logical field
/// differently, and an element may not even be a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAsset(Value);

impl RawAsset {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a key. Always `None` when the record is not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Canonical three-field asset exposed by the API.
///
/// All fields are non-empty; records that cannot satisfy that are dropped
/// during normalization and never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedAsset {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "IP Address")]
    pub ip_address: String,
}

impl NormalizedAsset {
    /// Case-insensitive substring test against IP address, model and name.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.ip_address.to_lowercase().contains(needle)
            || self.model.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
    }
}

/// One page of assets plus the metadata the listing endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetPage {
    pub assets: Vec<NormalizedAsset>,
    /// Count of every collected asset before slicing.
    pub total: usize,
    pub page: i64,
    pub per_page: i64,
}

/// Sentinel message returned when a search finds nothing.
pub const NO_MATCH_MESSAGE: &str = "No Asset Found";

/// Result of a search: the first matching asset or the no-match sentinel.
///
/// Serializes to either the bare asset object or `{"message": "No Asset Found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MatchOutcome {
    Found(NormalizedAsset),
    NoMatch { message: &'static str },
}

impl MatchOutcome {
    pub fn no_match() -> Self {
        Self::NoMatch {
            message: NO_MATCH_MESSAGE,
        }
    }
}

impl From<Option<NormalizedAsset>> for MatchOutcome {
    fn from(found: Option<NormalizedAsset>) -> Self {
        found.map_or_else(Self::no_match, Self::Found)
    }
}
