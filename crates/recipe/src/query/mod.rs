use std::collections::BTreeSet;

use mealsync_shared::recipe::Recipe;

impl crate::Catalog {
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.iter().find(|r| r.id == id)
    }

    /// Every distinct ingredient name in the catalog, sorted. This is the list
    /// the inventory editor offers.
    pub fn ingredient_names(&self) -> Vec<String> {
        self.iter()
            .flat_map(|r| r.ingredients.iter())
            .map(|i| i.name.to_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
