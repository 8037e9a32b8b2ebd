use mealsync_shared::{planner::CustomUnitMap, recipe::Recipe};

/// Display unit of an ingredient in the inventory editor.
///
/// Aggregation never consults this; requirement keys carry the recipe's own
/// unit.
pub struct UnitRegistry<'a> {
    custom_units: &'a CustomUnitMap,
    recipes: &'a [Recipe],
}

impl<'a> UnitRegistry<'a> {
    pub fn new(custom_units: &'a CustomUnitMap, recipes: &'a [Recipe]) -> Self {
        Self {
            custom_units,
            recipes,
        }
    }

    /// A user override first, then the unit of the first recipe ingredient
    /// with this exact name, then `""`.
    pub fn resolve_unit(&self, name: &str) -> &'a str {
        if let Some(unit) = self.custom_units.get(name).filter(|u| !u.is_empty()) {
            return unit;
        }

        self.recipes
            .iter()
            .flat_map(|r| r.ingredients.iter())
            .find(|i| i.name == name)
            .map(|i| i.unit.as_str())
            .unwrap_or("")
    }
}

/// Records a unit override. Blank units are ignored; returns whether the
/// override was stored.
pub fn set_custom_unit(custom_units: &mut CustomUnitMap, name: &str, unit: &str) -> bool {
    let unit = unit.trim();
    if unit.is_empty() {
        return false;
    }

    custom_units.insert(name.to_owned(), unit.to_owned());
    true
}
