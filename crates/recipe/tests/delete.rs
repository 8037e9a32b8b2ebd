use mealsync_recipe::{Catalog, CreateInput, IngredientInput};

fn input(name: &str, rows: &[(&str, &str, &str)]) -> CreateInput {
    CreateInput {
        name: name.to_owned(),
        tags: vec![],
        ingredients: rows
            .iter()
            .map(|(name, qty, unit)| IngredientInput {
                name: (*name).to_owned(),
                qty: (*qty).to_owned(),
                unit: (*unit).to_owned(),
            })
            .collect(),
    }
}

#[test]
fn test_delete() -> anyhow::Result<()> {
    let mut catalog = Catalog::default();
    let porridge = catalog.create(input("Porridge", &[("Oats", "0.5", "cup")]))?;
    let omelette = catalog.create(input("Omelette", &[("Eggs", "2", "pcs")]))?;

    catalog.delete(&porridge)?;

    assert!(catalog.find(&porridge).is_none());
    assert!(catalog.find(&omelette).is_some());
    assert_eq!(catalog.ingredient_names(), vec!["Eggs"]);

    let err = catalog.delete(&porridge).unwrap_err();
    assert_eq!(err.to_string(), "recipe not found".to_owned());

    Ok(())
}

#[test]
fn test_catalog_is_stored_as_plain_list() -> anyhow::Result<()> {
    let mut catalog = Catalog::new(mealsync_recipe::seed());
    catalog.create(input("Toast", &[("Bread", "2", "slice")]))?;

    let value = serde_json::to_value(&catalog)?;
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    assert_eq!(value[0]["name"], "Oatmeal w/ Berries");
    assert_eq!(value[1]["ingredients"][0]["qty"], 2.0);

    let decoded: Catalog = serde_json::from_value(value)?;
    assert_eq!(decoded, catalog);

    Ok(())
}
