//! Field checks for association payloads. Existence of the referenced rows is
//! checked by the caller against the store; this module only looks at JSON.

use crate::error::AppError;
use serde_json::Value;
use std::ops::RangeInclusive;

pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

/// Collects failure reasons so every check runs before the request is rejected.
#[derive(Debug, Default)]
pub struct RequestValidator {
    reasons: Vec<String>,
}

impl RequestValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error of `result`, if any, and passes the value through.
    pub fn check<T>(&mut self, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(reason) => {
                self.reasons.push(reason);
                None
            }
        }
    }

    pub fn reject(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn into_error(self) -> AppError {
        AppError::Validation(self.reasons)
    }
}

/// Field of a JSON object; anything that is not an object has no fields.
pub fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body.as_object().and_then(|m| m.get(name))
}

/// Integral value of a JSON number: `3` and `3.0` both give 3, `2.5` gives none.
fn whole_number(n: &serde_json::Number) -> Option<i64> {
    match n.as_i64() {
        Some(i) => Some(i),
        None => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => Some(f as i64),
            _ => None,
        },
    }
}

/// Price must be a JSON number with a whole value inside [`PRICE_RANGE`].
/// `3` and `3.0` are accepted; `2.5`, `"3"` and `true` are not.
pub fn validate_price(value: Option<&Value>) -> Result<i64, String> {
    let n = match value {
        None | Some(Value::Null) => return Err("price is required".into()),
        Some(Value::Number(n)) => n,
        Some(_) => return Err("price must be a number".into()),
    };
    let price =
        whole_number(n).ok_or_else(|| format!("price must be a whole number, got {}", n))?;
    if !PRICE_RANGE.contains(&price) {
        return Err(format!(
            "price must be between {} and {}, got {}",
            PRICE_RANGE.start(),
            PRICE_RANGE.end(),
            price
        ));
    }
    Ok(price)
}

/// Foreign-key fields must be JSON numbers with a whole value, same as price.
pub fn validate_id(name: &str, value: Option<&Value>) -> Result<i64, String> {
    match value {
        None | Some(Value::Null) => Err(format!("{} is required", name)),
        Some(Value::Number(n)) => {
            whole_number(n).ok_or_else(|| format!("{} must be an integer, got {}", name, n))
        }
        Some(_) => Err(format!("{} must be an integer", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_bounds_are_inclusive() {
        assert_eq!(validate_price(Some(&json!(1))), Ok(1));
        assert_eq!(validate_price(Some(&json!(30))), Ok(30));
        assert!(validate_price(Some(&json!(0))).is_err());
        assert!(validate_price(Some(&json!(31))).is_err());
        assert!(validate_price(Some(&json!(-5))).is_err());
    }

    #[test]
    fn price_accepts_whole_floats_only() {
        assert_eq!(validate_price(Some(&json!(12.0))), Ok(12));
        assert!(validate_price(Some(&json!(2.5))).is_err());
        assert!(validate_price(Some(&json!(30.5))).is_err());
    }

    #[test]
    fn price_must_be_present_and_numeric() {
        assert!(validate_price(None).is_err());
        assert!(validate_price(Some(&Value::Null)).is_err());
        assert!(validate_price(Some(&json!("10"))).is_err());
        assert!(validate_price(Some(&json!(true))).is_err());
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(validate_id("pizza_id", Some(&json!(7))), Ok(7));
        assert_eq!(validate_id("pizza_id", Some(&json!(7.0))), Ok(7));
        assert!(validate_id("pizza_id", Some(&json!(7.5))).is_err());
        assert!(validate_id("pizza_id", Some(&json!("7"))).is_err());
        assert!(validate_id("pizza_id", None).is_err());
    }

    #[test]
    fn field_of_non_object_is_absent() {
        assert!(field(&json!([1, 2]), "price").is_none());
        assert!(field(&Value::Null, "price").is_none());
        assert_eq!(field(&json!({"price": 4}), "price"), Some(&json!(4)));
    }

    #[test]
    fn validator_keeps_every_reason() {
        let mut v = RequestValidator::new();
        assert_eq!(v.check(validate_price(Some(&json!(0)))), None);
        assert_eq!(v.check(validate_id("pizza_id", None)), None);
        assert_eq!(v.check(validate_id("restaurant_id", Some(&json!(3)))), Some(3));
        assert!(!v.is_valid());
        match v.into_error() {
            AppError::Validation(reasons) => assert_eq!(reasons.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
