//! Input validation
//!
//! Accepts exactly one shape: a non-empty JSON array.

use serde_json::Value;

/// Borrow the items of `data` if it is a non-empty ordered sequence
#[must_use]
pub fn as_sequence(data: &Value) -> Option<&[Value]> {
    match data {
        Value::Array(items) if !items.is_empty() => Some(items.as_slice()),
        _ => None,
    }
}

/// Whether `data` is a non-empty ordered sequence
#[must_use]
pub fn validate(data: &Value) -> bool {
    as_sequence(data).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_non_empty_arrays() {
        assert!(validate(&json!([1, 2, 3])));
        assert!(validate(&json!([null])));
        assert!(validate(&json!(["mixed", 1, 2.5])));
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(!validate(&Value::Null));
        assert!(!validate(&json!([])));
        assert!(!validate(&json!(42)));
        assert!(!validate(&json!("123")));
        assert!(!validate(&json!({"items": [1, 2]})));
        assert!(!validate(&json!(false)));
    }

    #[test]
    fn test_as_sequence_borrows_items() {
        let data = json!([4, 5]);
        assert_eq!(as_sequence(&data).map(<[Value]>::len), Some(2));
        assert!(as_sequence(&json!([])).is_none());
    }
}
