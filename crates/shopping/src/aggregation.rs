use std::collections::HashMap;

use mealsync_shared::{
    mealplan::ScheduleMap,
    recipe::{Ingredient, Recipe},
    shopping::{Origin, RequirementEntry},
};

use crate::{
    collate::compare_names,
    key::{AggregationKey, normalize},
    schedule,
};

/// Requirements keyed by [`AggregationKey`], kept in first-seen order.
///
/// The first ingredient seen for a key decides the entry's display name and
/// unit casing, so a stable input order gives stable output.
#[derive(Default, Clone, Debug)]
pub struct Requirements {
    entries: Vec<RequirementEntry>,
    index: HashMap<AggregationKey, usize>,
}

impl Requirements {
    /// Adds one recipe ingredient. Quantities that are not finite count as zero.
    pub fn add(&mut self, recipe: &Recipe, ingredient: &Ingredient) {
        let key = normalize(&ingredient.name, &ingredient.unit);
        let position = match self.index.get(&key) {
            Some(position) => *position,
            None => {
                self.entries.push(RequirementEntry {
                    raw_name: ingredient.name.to_owned(),
                    unit: ingredient.unit.to_owned(),
                    qty: 0.0,
                    used_in: vec![],
                    origin: Origin::Recipes,
                });
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[position];
        if ingredient.qty.is_finite() {
            entry.qty += ingredient.qty;
        }

        if !entry.used_in.contains(&recipe.name) {
            entry.used_in.push(recipe.name.to_owned());
        }
    }

    pub fn get(&self, key: &AggregationKey) -> Option<&RequirementEntry> {
        self.index.get(key).map(|position| &self.entries[*position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &RequirementEntry> {
        self.entries.iter()
    }

    /// Entries sorted by display name. Entries with equal names keep their
    /// first-seen order.
    pub fn into_sorted(self) -> Vec<RequirementEntry> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| compare_names(&a.raw_name, &b.raw_name));
        entries
    }
}

/// Sums the ingredients of every resolved recipe per aggregation key.
pub fn aggregate<'a>(resolved: impl IntoIterator<Item = (&'a Recipe, &'a str)>) -> Requirements {
    let mut requirements = Requirements::default();

    for (recipe, _slot) in resolved {
        for ingredient in recipe.ingredients.iter() {
            requirements.add(recipe, ingredient);
        }
    }

    requirements
}

/// Total ingredient requirements of a schedule, sorted by display name.
pub fn aggregate_requirements(recipes: &[Recipe], schedule: &ScheduleMap) -> Vec<RequirementEntry> {
    aggregate(schedule::resolve(schedule, recipes)).into_sorted()
}
