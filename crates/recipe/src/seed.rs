use mealsync_shared::recipe::{Ingredient, Recipe};

/// Starter catalog for a brand new planner document.
pub fn seed() -> Vec<Recipe> {
    vec![Recipe {
        id: "1".to_owned(),
        name: "Oatmeal w/ Berries".to_owned(),
        tags: vec![],
        ingredients: vec![
            Ingredient::new("Rolled Oats", 0.5, "cup"),
            Ingredient::new("Milk", 1.0, "cup"),
            Ingredient::new("Blueberries", 0.25, "cup"),
            Ingredient::new("Honey", 1.0, "tbsp"),
        ],
    }]
}
