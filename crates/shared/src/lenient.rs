//! Decoders for data written by older or foreign clients. A malformed element
//! is dropped on its own instead of failing the whole document.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::recipe::parse_qty;

/// Reads a quantity from a number or a numeric string. Anything else is `0`.
pub(crate) fn qty_from_value(value: &Value) -> f64 {
    let qty = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_qty(s),
        _ => 0.0,
    };

    if qty.is_finite() { qty } else { 0.0 }
}

/// A list keeping only the elements that decode as `T`. A non-list is empty.
pub(crate) fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(vec![]);
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// A string-to-string map keeping only string values. A non-object is empty.
pub(crate) fn string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(value) => Some((key, value)),
            _ => None,
        })
        .collect())
}

/// Schedule slots: a string is an assignment, anything else an empty slot.
pub(crate) fn schedule<'de, D>(deserializer: D) -> Result<BTreeMap<String, Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .map(|(slot, value)| match value {
            Value::String(id) => (slot, Some(id)),
            _ => (slot, None),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_qty_from_value() {
        assert_eq!(qty_from_value(&json!(2)), 2.0);
        assert_eq!(qty_from_value(&json!("0.5")), 0.5);
        assert_eq!(qty_from_value(&json!("lots")), 0.0);
        assert_eq!(qty_from_value(&json!(null)), 0.0);
        assert_eq!(qty_from_value(&json!([1])), 0.0);
    }
}
