//! Input normalization for the preferences pipeline.
//!
//! A record read back from storage arrives as JSON text; callers inside
//! the application hand over decoded values. Both land here first.
//! Malformed text is recovered as an empty mapping rather than raised:
//! every downstream field is optional, so a corrupt record degrades to an
//! all-defaults result instead of breaking the caller.

use serde_json::{Map, Value};

use crate::validate::{IssueKind, ValidationError, ValidationIssue};

/// Normalize raw input into a key/value mapping.
///
/// A non-empty string is treated as JSON text; decode failures are logged
/// and recovered as an empty mapping (not a validation error). Anything
/// that is not an object after this step - an empty string, a number, an
/// array, a decoded scalar - fails with a [`ValidationError`].
pub fn coerce_object(input: &Value) -> Result<Map<String, Value>, ValidationError> {
    let decoded = match input {
        Value::String(text) if !text.is_empty() => match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("malformed preferences JSON, treating as empty: {err}");
                Value::Object(Map::new())
            }
        },
        other => other.clone(),
    };
    match decoded {
        Value::Object(map) => Ok(map),
        _ => Err(ValidationError::from(ValidationIssue::new(
            "preferences",
            IssueKind::NotAnObject,
            "expected an object",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_passes_through() {
        let map = coerce_object(&json!({"currency": "USD"})).unwrap();
        assert_eq!(map.get("currency"), Some(&json!("USD")));
    }

    #[test]
    fn test_json_text_is_decoded() {
        let map = coerce_object(&json!(r#"{"currency":"USD"}"#)).unwrap();
        assert_eq!(map.get("currency"), Some(&json!("USD")));
    }

    #[test]
    fn test_malformed_text_recovers_to_empty() {
        let map = coerce_object(&json!("{not valid")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_decoded_scalar_is_rejected() {
        let err = coerce_object(&json!("42")).unwrap_err();
        assert_eq!(err.issues[0].kind, IssueKind::NotAnObject);
    }

    #[test]
    fn test_empty_string_is_rejected() {
        assert!(coerce_object(&json!("")).is_err());
    }

    #[test]
    fn test_array_is_rejected() {
        assert!(coerce_object(&json!([1, 2])).is_err());
    }
}
