//! DTO base conventions.
//!
//! Output DTOs flatten [`BaseOut`] so every read projection surfaces
//! id + timestamps:
//!
//! ```ignore
//! #[derive(Serialize)]
//! struct WidgetOut {
//!     #[serde(flatten)]
//!     base: BaseOut,
//!     name: String,
//! }
//! ```
//!
//! Input DTOs rely on serde's default of silently dropping unknown fields.
//! Entity-facing payloads should be strict instead: annotate them with
//! `#[serde(deny_unknown_fields)]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base fields of every output DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseOut {
    pub id: i32,
    #[serde(with = "utc_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "utc_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// UTC ISO-8601 timestamp (de)serialization.
///
/// Always serializes with explicit offset notation (`+00:00`). Accepts an
/// already-serialized RFC 3339 string in any offset and normalizes back to
/// UTC, so a serialize/deserialize round trip is idempotent.
pub mod utc_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
