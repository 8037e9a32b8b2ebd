use mealsync_shared::recipe::{Ingredient, Recipe, parse_qty};
use validator::Validate;

/// One row of the recipe form. Quantity is kept as typed.
#[derive(Default, Clone, Debug)]
pub struct IngredientInput {
    pub name: String,
    pub qty: String,
    pub unit: String,
}

#[derive(Validate, Default, Clone, Debug)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<IngredientInput>,
}

impl super::Catalog {
    /// Adds a recipe and returns its new id.
    ///
    /// Blank rows (no name or no quantity) are dropped, as are rows whose
    /// quantity does not read as a positive number.
    pub fn create(&mut self, input: CreateInput) -> mealsync_shared::Result<String> {
        input.validate()?;

        let name = input.name.trim();
        if name.is_empty() {
            mealsync_shared::user!("Recipe name is required");
        }

        let ingredients = input
            .ingredients
            .into_iter()
            .filter(|row| !row.name.trim().is_empty() && !row.qty.trim().is_empty())
            .filter_map(|row| {
                let qty = parse_qty(&row.qty);
                (qty > 0.0).then(|| Ingredient::new(row.name.trim(), qty, row.unit.trim()))
            })
            .collect::<Vec<_>>();

        let tags = input
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();

        let id = ulid::Ulid::new().to_string();
        tracing::debug!(recipe.id = %id, ingredients = ingredients.len(), "recipe created");

        self.0.push(Recipe {
            id: id.to_owned(),
            name: name.to_owned(),
            tags,
            ingredients,
        });

        Ok(id)
    }
}
