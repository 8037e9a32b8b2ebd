use mealsync_shared::recipe::Recipe;

impl super::Catalog {
    /// Removes a recipe by id. Schedule slots that still point at it are left
    /// alone; they resolve to nothing from now on.
    pub fn delete(&mut self, id: &str) -> mealsync_shared::Result<Recipe> {
        let Some(position) = self.0.iter().position(|r| r.id == id) else {
            mealsync_shared::not_found!("recipe not found");
        };

        Ok(self.0.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Catalog, seed};

    #[test]
    fn test_delete() -> anyhow::Result<()> {
        let mut catalog = Catalog::new(seed());
        let id = catalog[0].id.to_owned();

        let removed = catalog.delete(&id)?;
        assert_eq!(removed.id, id);
        assert!(catalog.is_empty());

        let err = catalog.delete(&id).unwrap_err();
        assert_eq!(err.to_string(), "recipe not found".to_owned());

        Ok(())
    }
}
