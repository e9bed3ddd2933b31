//! Error taxonomy
//!
//! Two parallel hierarchies: business-logic errors carrying an arbitrary
//! JSON-serializable message, and HTTP-shaped errors carrying a
//! (code, message, detail) envelope. [`AppError`] is the umbrella used on
//! fallible storage paths; storage errors pass through it untranslated.
//!
//! The axum mapping lives in the api layer, not here.

use std::fmt;

use sea_orm::DbErr;
use serde_json::json;

use crate::types::JsonValue;

/// Business-logic failure. The payload is whatever JSON the raising code
/// wants to surface; the variant marks the category.
#[derive(Debug, Clone, PartialEq)]
pub enum BusinessError {
    /// Plain business rule violation
    Logic(JsonValue),
    /// A parameter the server was supposed to set is missing
    MissingServerParameter(JsonValue),
    /// A security policy was violated
    SecurityPolicy(JsonValue),
}

impl BusinessError {
    pub fn message(&self) -> &JsonValue {
        match self {
            BusinessError::Logic(message)
            | BusinessError::MissingServerParameter(message)
            | BusinessError::SecurityPolicy(message) => message,
        }
    }
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // String payloads render bare, everything else as JSON.
        match self.message() {
            JsonValue::String(message) => write!(f, "{}", message),
            other => write!(f, "{}", other),
        }
    }
}

impl std::error::Error for BusinessError {}

/// HTTP-shaped error: numeric code, human message, opaque detail.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpError {
    pub code: u16,
    pub message: String,
    pub detail: JsonValue,
}

impl HttpError {
    pub fn new(code: u16, message: impl Into<String>, detail: JsonValue) -> Self {
        Self {
            code,
            message: message.into(),
            detail,
        }
    }

    /// 404 with the `"not_found"` detail tag.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message, json!("not_found"))
    }

    /// 409 with the `"duplicate_entry"` detail tag.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message, json!("duplicate_entry"))
    }

    /// `{code, message, detail}` envelope for serialization at the API
    /// boundary.
    pub fn to_json(&self) -> JsonValue {
        json!({
            "code": self.code,
            "message": self.message,
            "detail": self.detail,
        })
    }
}

impl Default for HttpError {
    fn default() -> Self {
        Self::new(400, "Bad Request", JsonValue::Null)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for HttpError {}

/// Umbrella error for storage-facing code paths.
#[derive(Debug)]
pub enum AppError {
    Http(HttpError),
    Business(BusinessError),
    /// Storage-layer error, propagated unchanged.
    Database(DbErr),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(err) => write!(f, "{}", err),
            AppError::Business(err) => write!(f, "{}", err),
            AppError::Database(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Http(err) => Some(err),
            AppError::Business(err) => Some(err),
            AppError::Database(err) => Some(err),
        }
    }
}

impl From<HttpError> for AppError {
    fn from(err: HttpError) -> Self {
        AppError::Http(err)
    }
}

impl From<BusinessError> for AppError {
    fn from(err: BusinessError) -> Self {
        AppError::Business(err)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_envelope_is_bad_request() {
        let err = HttpError::default();
        assert_eq!(err.code, 400);
        assert_eq!(err.message, "Bad Request");
        assert_eq!(err.detail, JsonValue::Null);
    }

    #[test]
    fn not_found_carries_tag() {
        let err = HttpError::not_found("Item not found with id: 7");
        assert_eq!(err.code, 404);
        assert_eq!(err.detail, json!("not_found"));
        assert_eq!(
            err.to_json(),
            json!({
                "code": 404,
                "message": "Item not found with id: 7",
                "detail": "not_found",
            })
        );
    }

    #[test]
    fn conflict_carries_tag() {
        let err = HttpError::conflict("already there");
        assert_eq!(err.code, 409);
        assert_eq!(err.detail, json!("duplicate_entry"));
    }

    #[test]
    fn business_error_displays_bare_string() {
        let err = BusinessError::Logic(json!("quota exceeded"));
        assert_eq!(err.to_string(), "quota exceeded");

        let structured = BusinessError::SecurityPolicy(json!({"rule": "no-write"}));
        assert_eq!(structured.to_string(), r#"{"rule":"no-write"}"#);
    }
}
