use serde::{Deserialize, Deserializer, Serialize};

/// One line of a recipe. Not addressable on its own.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_qty")]
    pub qty: f64,
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, qty: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qty,
            unit: unit.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "crate::lenient::seq")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "crate::lenient::seq")]
    pub ingredients: Vec<Ingredient>,
}

/// Parses the leading floating-point number of `value`.
///
/// Mirrors how quantities typed into a free-text field are read: leading
/// whitespace is ignored, trailing garbage is dropped (`"2 cups"` is `2`),
/// and anything without a numeric prefix or that is not finite reads as `0`.
pub fn parse_qty(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..end];

    (1..=candidate.len())
        .rev()
        .filter(|len| candidate.is_char_boundary(*len))
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .filter(|qty| qty.is_finite())
        .unwrap_or(0.0)
}

pub(crate) fn lenient_qty<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(crate::lenient::qty_from_value(&value))
}
