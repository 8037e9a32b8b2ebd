use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{mealplan::ScheduleMap, recipe::Recipe, shopping::ExtraItem};

/// Ingredient name, exactly as stored, to quantity on hand.
pub type InventoryMap = BTreeMap<String, f64>;

/// Ingredient name to a user-chosen display unit.
pub type CustomUnitMap = BTreeMap<String, String>;

/// Inventory as it may arrive from the store.
///
/// The shape decides the variant; bad elements are dropped one by one. A map
/// keeps only the entries whose quantity reads as a positive number, and a
/// legacy list keeps only its strings.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum InventoryPayload {
    Current(InventoryMap),
    /// Older documents only tracked which items were in stock.
    Legacy(Vec<String>),
    Unknown(Value),
}

impl<'de> Deserialize<'de> for InventoryPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let payload = match Value::deserialize(deserializer)? {
            Value::Object(entries) => Self::Current(
                entries
                    .into_iter()
                    .map(|(name, qty)| (name, crate::lenient::qty_from_value(&qty)))
                    .filter(|(_, qty)| *qty > 0.0)
                    .collect(),
            ),
            Value::Array(names) => Self::Legacy(
                names
                    .into_iter()
                    .filter_map(|name| match name {
                        Value::String(name) => Some(name),
                        _ => None,
                    })
                    .collect(),
            ),
            other => Self::Unknown(other),
        };

        Ok(payload)
    }
}

impl Default for InventoryPayload {
    fn default() -> Self {
        Self::Current(InventoryMap::new())
    }
}

/// The single document the planner reads and writes.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerDocument {
    #[serde(deserialize_with = "crate::lenient::seq")]
    pub recipes: Vec<Recipe>,
    #[serde(deserialize_with = "crate::lenient::schedule")]
    pub schedule: ScheduleMap,
    pub inventory: InventoryPayload,
    #[serde(deserialize_with = "crate::lenient::string_map")]
    pub custom_units: CustomUnitMap,
    #[serde(deserialize_with = "crate::lenient::seq")]
    pub extra_list: Vec<ExtraItem>,
}

/// Top-level document fields. Pushes replace exactly one of these.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Recipes,
    Schedule,
    Inventory,
    CustomUnits,
    ExtraList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_current_document() -> anyhow::Result<()> {
        let document: PlannerDocument = serde_json::from_str(
            r#"{
                "recipes": [{"id": "1", "name": "Porridge", "ingredients": [{"name": "Oats", "qty": 0.5, "unit": "cup"}]}],
                "schedule": {"Monday-Breakfast": "1", "Monday-Lunch": "", "Monday-Dinner": null},
                "inventory": {"Oats": 2},
                "customUnits": {"Oats": "kg"},
                "extraList": [{"id": "x", "name": "Soap", "qty": 1, "unit": "bar"}]
            }"#,
        )?;

        assert_eq!(document.recipes[0].ingredients[0].qty, 0.5);
        assert_eq!(document.recipes[0].tags, Vec::<String>::new());
        assert_eq!(document.schedule.len(), 3);
        assert_eq!(document.schedule["Monday-Dinner"], None);
        assert_eq!(
            document.inventory,
            InventoryPayload::Current(InventoryMap::from([("Oats".to_owned(), 2.0)]))
        );
        assert_eq!(document.custom_units["Oats"], "kg");
        assert_eq!(document.extra_list[0].name, "Soap");

        Ok(())
    }

    #[test]
    fn test_decode_legacy_and_unknown_inventory() -> anyhow::Result<()> {
        let document: PlannerDocument = serde_json::from_str(r#"{"inventory": ["Milk", "Eggs"]}"#)?;
        assert_eq!(
            document.inventory,
            InventoryPayload::Legacy(vec!["Milk".to_owned(), "Eggs".to_owned()])
        );

        let document: PlannerDocument = serde_json::from_str(r#"{"inventory": 42}"#)?;
        assert!(matches!(document.inventory, InventoryPayload::Unknown(_)));

        let document: PlannerDocument = serde_json::from_str("{}")?;
        assert_eq!(document, PlannerDocument::default());

        Ok(())
    }

    #[test]
    fn test_decode_inventory_drops_bad_entries_only() -> anyhow::Result<()> {
        let document: PlannerDocument = serde_json::from_str(
            r#"{"inventory": {"Milk": 2, "Eggs": "6", "Salt": null, "Oats": 0, "Rice": -1, "Tea": "lots"}}"#,
        )?;
        assert_eq!(
            document.inventory,
            InventoryPayload::Current(InventoryMap::from([
                ("Eggs".to_owned(), 6.0),
                ("Milk".to_owned(), 2.0),
            ]))
        );

        let document: PlannerDocument =
            serde_json::from_str(r#"{"inventory": ["Milk", null, 3, "Eggs"]}"#)?;
        assert_eq!(
            document.inventory,
            InventoryPayload::Legacy(vec!["Milk".to_owned(), "Eggs".to_owned()])
        );

        Ok(())
    }

    #[test]
    fn test_decode_document_skips_malformed_elements() -> anyhow::Result<()> {
        let document: PlannerDocument = serde_json::from_str(
            r#"{
                "recipes": [
                    {"name": "No id"},
                    {"id": "1", "name": "Porridge", "tags": ["warm", 3], "ingredients": [
                        {"name": "Oats", "qty": 0.5, "unit": "cup"},
                        {"name": 7, "qty": 1, "unit": "cup"}
                    ]}
                ],
                "schedule": {"Monday-Lunch": "1", "Tuesday-Lunch": 7, "Friday-Dinner": {"id": "1"}},
                "customUnits": {"Oats": "kg", "Milk": 1},
                "extraList": [{"name": "No id"}, {"id": "x", "name": "Soap", "qty": "2", "unit": "bar"}]
            }"#,
        )?;

        assert_eq!(document.recipes.len(), 1);
        assert_eq!(document.recipes[0].tags, vec!["warm".to_owned()]);
        assert_eq!(document.recipes[0].ingredients.len(), 1);
        assert_eq!(document.schedule["Monday-Lunch"], Some("1".to_owned()));
        assert_eq!(document.schedule["Tuesday-Lunch"], None);
        assert_eq!(document.schedule["Friday-Dinner"], None);
        assert_eq!(document.custom_units, CustomUnitMap::from([("Oats".to_owned(), "kg".to_owned())]));
        assert_eq!(document.extra_list.len(), 1);
        assert_eq!(document.extra_list[0].qty, 2.0);

        let document: PlannerDocument =
            serde_json::from_str(r#"{"recipes": null, "schedule": [], "customUnits": "kg"}"#)?;
        assert_eq!(document, PlannerDocument::default());

        Ok(())
    }

    #[test]
    fn test_field_names_match_document_keys() {
        assert_eq!(Field::CustomUnits.as_ref(), "customUnits");
        assert_eq!(Field::ExtraList.to_string(), "extraList");
        assert_eq!("schedule".parse::<Field>().unwrap(), Field::Schedule);
    }
}
