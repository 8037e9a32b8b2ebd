use std::{cmp::Ordering, collections::HashMap};

use mealsync_shared::{
    mealplan::{ScheduleMap, SlotKey},
    recipe::Recipe,
};

/// Resolves schedule assignments to recipes, as `(recipe, slot key)` pairs.
///
/// Empty slots and ids with no matching recipe (deleted since they were
/// planned) are skipped. Slots come out in chronological order; keys that are
/// not slot keys follow in lexical order. When the catalog holds the same id
/// twice the first recipe wins.
pub fn resolve<'a>(
    schedule: &'a ScheduleMap,
    recipes: &'a [Recipe],
) -> impl Iterator<Item = (&'a Recipe, &'a str)> + 'a {
    let mut index = HashMap::new();
    for recipe in recipes {
        index.entry(recipe.id.as_str()).or_insert(recipe);
    }

    let mut assignments = schedule
        .iter()
        .filter_map(|(slot, recipe_id)| {
            let Some(recipe_id) = recipe_id.as_deref().filter(|id| !id.is_empty()) else {
                tracing::trace!(slot = slot.as_str(), "empty slot");
                return None;
            };

            Some((slot.parse::<SlotKey>().ok(), slot.as_str(), recipe_id))
        })
        .collect::<Vec<_>>();

    assignments.sort_by(|a, b| match (&a.0, &b.0) {
        (Some(x), Some(y)) => x.cmp(y).then_with(|| a.1.cmp(b.1)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.1.cmp(b.1),
    });

    assignments
        .into_iter()
        .filter_map(move |(_, slot, recipe_id)| match index.get(recipe_id) {
            Some(recipe) => Some((*recipe, slot)),
            None => {
                tracing::debug!(slot, recipe_id, "skipping schedule slot with unknown recipe");
                None
            }
        })
}
