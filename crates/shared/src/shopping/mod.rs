use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::recipe::parse_qty;

/// A shopping entry added by hand, with no backing recipe.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct ExtraItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "crate::recipe::lenient_qty")]
    pub qty: f64,
    #[serde(default)]
    pub unit: String,
}

impl ExtraItem {
    /// Creates an item with a fresh unique id. `qty` is read the same way
    /// recipe quantities are.
    pub fn new(name: impl Into<String>, qty: &str, unit: impl Into<String>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name: name.into(),
            qty: parse_qty(qty),
            unit: unit.into(),
        }
    }
}

/// Where a requirement comes from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Origin {
    Recipes,
    Manual { id: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequirementEntry {
    pub raw_name: String,
    pub unit: String,
    pub qty: f64,
    pub used_in: Vec<String>,
    pub origin: Origin,
}

impl RequirementEntry {
    pub fn is_manual(&self) -> bool {
        matches!(self.origin, Origin::Manual { .. })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuyEntry {
    #[serde(flatten)]
    pub requirement: RequirementEntry,
    pub buy_qty: f64,
    pub stock_qty: f64,
}

impl BuyEntry {
    /// Stock fully covers the requirement.
    pub fn is_in_stock(&self) -> bool {
        self.buy_qty <= 0.0
    }
}

impl Deref for BuyEntry {
    type Target = RequirementEntry;

    fn deref(&self) -> &Self::Target {
        &self.requirement
    }
}

/// The two derived lists shown to the user.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct ShoppingView {
    pub total: Vec<BuyEntry>,
    pub buy: Vec<BuyEntry>,
}

/// Formats a quantity for display without float noise.
pub fn format_quantity(qty: f64) -> String {
    let rounded = (qty * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }

    format!("{rounded}")
}
