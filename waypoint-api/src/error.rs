//! Backend error envelope.
//!
//! Every non-2xx response carries `{"detail": ...}` where `detail` is either
//! a plain message or, for 422 responses, a list of field violations. The
//! client dispatches some 400/409 responses on well-known detail strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detail strings the backend is known to emit. Dispatch happens on exact
/// string equality, so these live in one place.
pub mod detail {
    pub const BAD_CREDENTIALS: &str = "Incorrect email or password";
    pub const USER_ALREADY_EXISTS: &str = "User with this email already exists";
    pub const NOTE_ALREADY_EXISTS: &str = "Note with this title already exists";
}

/// The body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: ErrorDetail,
}

/// Either a plain message or a list of validation violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Violations(Vec<FieldViolation>),
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Location path, e.g. `["body", "title"]`. Segments may be array
    /// indices for list-valued fields.
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One segment of a violation's location path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(u64),
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocSegment::Key(key) => f.write_str(key),
            LocSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl FieldViolation {
    /// Dotted field path, e.g. `body.title` or `body.tags.0`.
    pub fn field_path(&self) -> String {
        let mut path = String::new();
        for (i, segment) in self.loc.iter().enumerate() {
            if i > 0 {
                path.push('.');
            }
            path.push_str(&segment.to_string());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_detail() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "Incorrect email or password"}"#).unwrap();
        assert_eq!(
            body.detail,
            ErrorDetail::Message(detail::BAD_CREDENTIALS.to_string())
        );
    }

    #[test]
    fn parses_violation_detail() {
        let raw = r#"{"detail": [
            {"loc": ["body", "title"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "tags", 0], "msg": "too long", "type": "value_error"}
        ]}"#;
        let body: ApiErrorBody = serde_json::from_str(raw).unwrap();
        let ErrorDetail::Violations(violations) = body.detail else {
            panic!("expected violations");
        };
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field_path(), "body.title");
        assert_eq!(violations[1].field_path(), "body.tags.0");
    }

    #[test]
    fn rejects_unrecognized_shape() {
        assert!(serde_json::from_str::<ApiErrorBody>(r#"{"error": "nope"}"#).is_err());
    }
}
