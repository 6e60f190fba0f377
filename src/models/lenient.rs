// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deserializers for upstream fields that arrive as `null` or as strings.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Treat an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Amount given as a number, a numeric string, or `null` (zero).
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("number out of range: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("not a number: {s:?}"))),
        other => Err(de::Error::custom(format!(
            "expected a number or numeric string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Amount {
        #[serde(default, deserialize_with = "number_or_string")]
        value: f64,
        #[serde(default, deserialize_with = "null_as_default")]
        count: u32,
    }

    #[test]
    fn test_numeric_string_accepted() {
        let amount: Amount = serde_json::from_value(json!({"value": " 150000.5 "})).unwrap();
        assert_eq!(amount.value, 150000.5);
    }

    #[test]
    fn test_null_and_missing_become_zero() {
        let amount: Amount =
            serde_json::from_value(json!({"value": null, "count": null})).unwrap();
        assert_eq!(amount.value, 0.0);
        assert_eq!(amount.count, 0);

        let amount: Amount = serde_json::from_value(json!({})).unwrap();
        assert_eq!(amount.value, 0.0);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(serde_json::from_value::<Amount>(json!({"value": "lots"})).is_err());
        assert!(serde_json::from_value::<Amount>(json!({"value": [1]})).is_err());
    }
}
