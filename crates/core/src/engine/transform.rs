//! Per-item transform and threshold filter
//!
//! Every element goes through `y = x * 6 + 67` and survives only when
//! `y > 99`. Integers stay integers, floats stay floats. The outcome for a
//! single element is an explicit [`ItemOutcome`], never a panic.

use serde_json::{Number, Value};
use thiserror::Error;

/// Multiplier of the affine transform
pub const SCALE: i64 = 6;
/// Offset of the affine transform
pub const OFFSET: i64 = 67;
/// Transformed values must be strictly greater than this to be kept
pub const THRESHOLD: i64 = 99;

/// Reasons a single item cannot be transformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Item is not a number
    #[error("unsupported operand: expected number, found {found}")]
    NotNumeric {
        /// JSON kind of the offending item
        found: &'static str,
    },

    /// Integer result exceeds the 128-bit working range
    #[error("integer overflow transforming {value}")]
    Overflow {
        /// Original value
        value: String,
    },

    /// Float result is infinite or NaN
    #[error("non-finite result transforming {value}")]
    NonFinite {
        /// Original value
        value: String,
    },
}

/// What happened to one item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// Transformed and above the threshold
    Kept(Number),
    /// Transformed but at or below the threshold
    Filtered(Number),
    /// Could not be transformed
    Skipped(ItemError),
}

enum Scalar {
    Int(i128),
    Float(f64),
}

impl Scalar {
    #[allow(clippy::cast_precision_loss)]
    fn exceeds_threshold(&self) -> bool {
        match self {
            Self::Int(y) => *y > i128::from(THRESHOLD),
            Self::Float(y) => *y > THRESHOLD as f64,
        }
    }

    fn into_number(self) -> Option<Number> {
        match self {
            Self::Int(y) => int_number(y),
            Self::Float(y) => Number::from_f64(y),
        }
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JSON integer of any width; wider than 64 bits goes through the decimal text
fn int_number(y: i128) -> Option<Number> {
    if let Ok(y) = i64::try_from(y) {
        Some(Number::from(y))
    } else if let Ok(y) = u64::try_from(y) {
        Some(Number::from(y))
    } else {
        serde_json::from_str(&y.to_string()).ok()
    }
}

fn operand(item: &Value) -> Result<Scalar, ItemError> {
    let Value::Number(n) = item else {
        return Err(ItemError::NotNumeric {
            found: kind_name(item),
        });
    };

    if let Some(i) = n.as_i64() {
        Ok(Scalar::Int(i128::from(i)))
    } else if let Some(u) = n.as_u64() {
        Ok(Scalar::Int(i128::from(u)))
    } else if let Ok(i) = n.to_string().parse::<i128>() {
        // parsed input may carry integers wider than 64 bits
        Ok(Scalar::Int(i))
    } else if let Some(f) = n.as_f64() {
        Ok(Scalar::Float(f))
    } else {
        Err(ItemError::NotNumeric { found: "number" })
    }
}

fn apply(item: &Value) -> Result<Scalar, ItemError> {
    match operand(item)? {
        Scalar::Int(x) => x
            .checked_mul(i128::from(SCALE))
            .and_then(|y| y.checked_add(i128::from(OFFSET)))
            .map(Scalar::Int)
            .ok_or_else(|| ItemError::Overflow {
                value: item.to_string(),
            }),
        Scalar::Float(x) => {
            #[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
            let y = x * SCALE as f64 + OFFSET as f64;
            if y.is_finite() {
                Ok(Scalar::Float(y))
            } else {
                Err(ItemError::NonFinite {
                    value: item.to_string(),
                })
            }
        }
    }
}

/// Apply `x * 6 + 67` to one item.
///
/// Integer results keep every digit, including those past the 64-bit range.
///
/// # Errors
///
/// Returns [`ItemError`] if the item is not a number or the result cannot be
/// represented as a JSON number.
pub fn transform_item(item: &Value) -> Result<Number, ItemError> {
    apply(item)?
        .into_number()
        .ok_or_else(|| ItemError::Overflow {
            value: item.to_string(),
        })
}

/// Whether a transformed value passes the result filter
#[must_use]
pub fn exceeds_threshold(value: &Number) -> bool {
    if let Some(i) = value.as_i64() {
        i > THRESHOLD
    } else if value.as_u64().is_some() {
        // only values above i64::MAX land here
        true
    } else if let Ok(i) = value.to_string().parse::<i128>() {
        i > i128::from(THRESHOLD)
    } else {
        #[allow(clippy::cast_precision_loss)]
        let threshold = THRESHOLD as f64;
        value.as_f64().is_some_and(|f| f > threshold)
    }
}

/// Transform and filter one item
///
/// The threshold is checked on the raw result, so values far below it are
/// filtered no matter how wide they are.
#[must_use]
pub fn evaluate(item: &Value) -> ItemOutcome {
    let y = match apply(item) {
        Ok(y) => y,
        Err(e) => return ItemOutcome::Skipped(e),
    };
    let keep = y.exceeds_threshold();

    match y.into_number() {
        Some(n) if keep => ItemOutcome::Kept(n),
        Some(n) => ItemOutcome::Filtered(n),
        None => ItemOutcome::Skipped(ItemError::Overflow {
            value: item.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_transform() {
        assert_eq!(transform_item(&json!(0)), Ok(Number::from(67)));
        assert_eq!(transform_item(&json!(6)), Ok(Number::from(103)));
        assert_eq!(transform_item(&json!(-20)), Ok(Number::from(-53)));
    }

    #[test]
    fn test_float_transform() {
        let y = transform_item(&json!(1.5));
        assert_eq!(y.ok().and_then(|n| n.as_f64()), Some(76.0_f64));
    }

    #[test]
    fn test_threshold_boundary() {
        // 6 * 5 + 67 = 97, 6 * 6 + 67 = 103
        assert!(matches!(evaluate(&json!(5)), ItemOutcome::Filtered(_)));
        assert_eq!(evaluate(&json!(6)), ItemOutcome::Kept(Number::from(103)));
        assert!(!exceeds_threshold(&Number::from(99)));
        assert!(exceeds_threshold(&Number::from(100)));
    }

    #[test]
    fn test_float_threshold() {
        // 6 * 5.34 + 67 = 99.04
        assert!(matches!(evaluate(&json!(5.34)), ItemOutcome::Kept(_)));
        // 6 * 5.33 + 67 = 98.98
        assert!(matches!(evaluate(&json!(5.33)), ItemOutcome::Filtered(_)));
    }

    #[test]
    fn test_non_numeric_items_skipped() {
        for item in [json!("7"), json!(null), json!(true), json!([1]), json!({"x": 1})] {
            assert!(matches!(
                evaluate(&item),
                ItemOutcome::Skipped(ItemError::NotNumeric { .. })
            ));
        }
    }

    #[test]
    fn test_large_unsigned_result() {
        // (i64::MAX / 4) * 6 + 67 exceeds i64 but fits u64
        let y = transform_item(&json!(i64::MAX / 4));
        assert!(y.as_ref().is_ok_and(|n| n.as_u64().is_some()));
        assert!(y.is_ok_and(|n| exceeds_threshold(&n)));
    }

    #[test]
    fn test_result_wider_than_64_bits_kept() {
        // 18446744073709551615 * 6 + 67
        let outcome = evaluate(&json!(u64::MAX));
        assert!(matches!(
            &outcome,
            ItemOutcome::Kept(n) if n.to_string() == "110680464442257309757"
        ));
        assert!(matches!(&outcome, ItemOutcome::Kept(n) if exceeds_threshold(n)));
    }

    #[test]
    fn test_large_negative_filtered() {
        let outcome = evaluate(&json!(i64::MIN));
        assert!(matches!(
            &outcome,
            ItemOutcome::Filtered(n) if n.to_string() == "-55340232221128654781"
        ));
        assert!(matches!(&outcome, ItemOutcome::Filtered(n) if !exceeds_threshold(n)));
    }

    #[test]
    fn test_wide_integer_input() -> Result<(), serde_json::Error> {
        let item: Value = serde_json::from_str("110680464442257309757")?;
        let y = transform_item(&item).map(|n| n.to_string());
        assert_eq!(y.as_deref(), Ok("664082786653543858609"));
        Ok(())
    }

    #[test]
    fn test_integer_beyond_working_range_skipped() -> Result<(), serde_json::Error> {
        let item: Value = serde_json::from_str(&i128::MAX.to_string())?;
        assert!(matches!(
            evaluate(&item),
            ItemOutcome::Skipped(ItemError::Overflow { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_mixed_extremes() {
        let outcomes: Vec<_> = [
            json!(u64::MAX),
            json!(i64::MIN),
            json!(1e308),
            json!(true),
            json!(5.5),
        ]
        .iter()
        .map(evaluate)
        .collect();

        assert!(matches!(outcomes.first(), Some(ItemOutcome::Kept(_))));
        assert!(matches!(outcomes.get(1), Some(ItemOutcome::Filtered(_))));
        assert!(matches!(
            outcomes.get(2),
            Some(ItemOutcome::Skipped(ItemError::NonFinite { .. }))
        ));
        assert!(matches!(
            outcomes.get(3),
            Some(ItemOutcome::Skipped(ItemError::NotNumeric { found: "bool" }))
        ));
        assert!(matches!(
            outcomes.get(4),
            Some(ItemOutcome::Kept(n)) if n.as_f64() == Some(100.0_f64)
        ));
    }

    #[test]
    fn test_non_finite_float_skipped() {
        assert!(matches!(
            evaluate(&json!(f64::MAX)),
            ItemOutcome::Skipped(ItemError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_item_error_display() {
        let err = ItemError::NotNumeric { found: "string" };
        assert_eq!(
            err.to_string(),
            "unsupported operand: expected number, found string"
        );
    }
}
