use std::ops::Deref;

use mealsync_shared::recipe::Recipe;
use serde::{Deserialize, Serialize};

mod create;
mod delete;

pub use create::{CreateInput, IngredientInput};

/// The user's recipe collection, in submission order.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Catalog(Vec<Recipe>);

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self(recipes)
    }
}

impl Deref for Catalog {
    type Target = [Recipe];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
