//! Request parameter and body types for the asset endpoints.

use std::num::IntErrorKind;

use serde::{de, Deserialize, Deserializer};

/// Pagination parameters for `GET /assets` (`?page=&per_page=`).
///
/// Missing values fall back to the collector defaults in the handler.
/// Integers outside the `i64` range saturate instead of being rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "saturating_int")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "saturating_int")]
    pub per_page: Option<i64>,
}

/// Body of `POST /match`. A missing `search` key is the empty query.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub search: String,
}

fn saturating_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_saturating(&raw).map(Some).map_err(de::Error::custom)
}

fn parse_saturating(raw: &str) -> Result<i64, String> {
    match raw.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("invalid integer {raw:?}: {err}")),
        },
    }
}
