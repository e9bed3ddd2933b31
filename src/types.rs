//! Shared type aliases.

/// Any JSON-serializable payload.
pub type JsonValue = serde_json::Value;

/// Equality filter set for listing queries, keyed by attribute name.
///
/// The pagination keys `skip` and `limit` are excluded from filter
/// application if a caller leaves them in the map.
pub type FilterMap = serde_json::Map<String, serde_json::Value>;
