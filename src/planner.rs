use mealsync_recipe::{Catalog, CreateInput};
use mealsync_shared::{
    mealplan::{ScheduleMap, SlotKey},
    planner::{CustomUnitMap, Field, InventoryMap, InventoryPayload, PlannerDocument},
    recipe::Recipe,
    shopping::{ExtraItem, ShoppingView},
};
use mealsync_shopping::{UnitRegistry, aggregate_requirements, merge_extras_labelled, reconcile};
use serde_json::Value;
use strum::Display;

use crate::{config::PlannerConfig, store::DocumentStore};

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    Syncing,
    Synced,
    Error,
}

/// One user's planner session.
///
/// Every edit updates the local copy, recomputes the shopping lists, then
/// pushes the one changed field to the store. A failed push keeps the local
/// edit and leaves the session in [`SyncStatus::Error`].
pub struct Planner<S: DocumentStore> {
    store: S,
    config: PlannerConfig,
    recipes: Catalog,
    schedule: ScheduleMap,
    inventory: InventoryMap,
    custom_units: CustomUnitMap,
    extra_list: Vec<ExtraItem>,
    shopping: ShoppingView,
    status: SyncStatus,
}

impl<S: DocumentStore> Planner<S> {
    /// Loads the document, creating it on first use.
    pub async fn open(store: S, config: PlannerConfig) -> mealsync_shared::Result<Self> {
        let existing = store.load().await?;
        let mut planner = Self {
            store,
            config,
            recipes: Catalog::default(),
            schedule: ScheduleMap::new(),
            inventory: InventoryMap::new(),
            custom_units: CustomUnitMap::new(),
            extra_list: vec![],
            shopping: ShoppingView::default(),
            status: SyncStatus::Syncing,
        };

        match existing {
            Some(document) => {
                planner.apply_snapshot(document)?;
                tracing::info!(recipes = planner.recipes.len(), "planner document loaded");
            }
            None => {
                let document = PlannerDocument {
                    recipes: if planner.config.seed_recipes {
                        mealsync_recipe::seed()
                    } else {
                        vec![]
                    },
                    ..Default::default()
                };

                planner.store.save(serde_json::to_value(&document)?).await?;
                planner.apply_document(document);
                tracing::info!(recipes = planner.recipes.len(), "planner document created");
            }
        }

        Ok(planner)
    }

    /// Replaces local state with a document received from the store.
    pub fn apply_snapshot(&mut self, document: Value) -> mealsync_shared::Result<()> {
        if !document.is_object() {
            mealsync_shared::bail!("planner document is not an object");
        }

        let document = serde_json::from_value::<PlannerDocument>(document)?;
        self.apply_document(document);

        Ok(())
    }

    fn apply_document(&mut self, document: PlannerDocument) {
        if matches!(document.inventory, InventoryPayload::Legacy(_)) {
            tracing::info!("migrating legacy inventory list");
        }

        self.recipes = Catalog::new(document.recipes);
        self.schedule = document.schedule;
        self.inventory = mealsync_shopping::normalize_inventory(document.inventory);
        self.custom_units = document.custom_units;
        self.extra_list = document.extra_list;
        self.status = SyncStatus::Synced;
        self.recompute();
    }

    fn recompute(&mut self) {
        let requirements = aggregate_requirements(&self.recipes, &self.schedule);
        self.shopping = merge_extras_labelled(
            reconcile(requirements, &self.inventory),
            &self.extra_list,
            &self.config.manual_label,
        );
    }

    async fn push(&mut self, field: Field) -> mealsync_shared::Result<()> {
        let value = match field {
            Field::Recipes => serde_json::to_value(&self.recipes)?,
            Field::Schedule => serde_json::to_value(&self.schedule)?,
            Field::Inventory => serde_json::to_value(&self.inventory)?,
            Field::CustomUnits => serde_json::to_value(&self.custom_units)?,
            Field::ExtraList => serde_json::to_value(&self.extra_list)?,
        };

        self.status = SyncStatus::Syncing;

        match self.store.update_field(field, value).await {
            Ok(()) => {
                self.status = SyncStatus::Synced;
                tracing::debug!(field = field.as_ref(), "field pushed");
                Ok(())
            }
            Err(err) => {
                self.status = SyncStatus::Error;
                tracing::error!(field = field.as_ref(), error = %err, "failed to push field");
                Err(err.into())
            }
        }
    }

    pub async fn add_recipe(&mut self, input: CreateInput) -> mealsync_shared::Result<String> {
        let id = self.recipes.create(input)?;
        self.recompute();
        self.push(Field::Recipes).await?;

        Ok(id)
    }

    pub async fn delete_recipe(&mut self, id: &str) -> mealsync_shared::Result<()> {
        self.recipes.delete(id)?;
        self.recompute();
        self.push(Field::Recipes).await
    }

    /// Plans a recipe into a slot; `None` or an empty id clears the slot.
    pub async fn assign(
        &mut self,
        slot: SlotKey,
        recipe_id: Option<&str>,
    ) -> mealsync_shared::Result<()> {
        match recipe_id.filter(|id| !id.is_empty()) {
            Some(id) => {
                if self.recipes.find(id).is_none() {
                    mealsync_shared::not_found!("recipe not found");
                }
                self.schedule.insert(slot.to_string(), Some(id.to_owned()));
            }
            None => {
                self.schedule.remove(&slot.to_string());
            }
        }

        self.recompute();
        self.push(Field::Schedule).await
    }

    /// Sets the quantity on hand from the inventory editor. A non-empty unit
    /// also becomes the item's display unit.
    pub async fn set_stock(
        &mut self,
        name: &str,
        qty: f64,
        unit: Option<&str>,
    ) -> mealsync_shared::Result<()> {
        mealsync_shopping::set_stock(&mut self.inventory, name, qty);
        let unit_changed = unit
            .map(|unit| mealsync_shopping::set_custom_unit(&mut self.custom_units, name, unit))
            .unwrap_or(false);

        self.recompute();
        self.push(Field::Inventory).await?;
        if unit_changed {
            self.push(Field::CustomUnits).await?;
        }

        Ok(())
    }

    pub async fn adjust_stock(&mut self, name: &str, delta: f64) -> mealsync_shared::Result<f64> {
        let qty = mealsync_shopping::adjust_stock(&mut self.inventory, name, delta);
        self.recompute();
        self.push(Field::Inventory).await?;

        Ok(qty)
    }

    /// Returns whether the item is now in stock.
    pub async fn toggle_stock(&mut self, name: &str) -> mealsync_shared::Result<bool> {
        let in_stock = mealsync_shopping::toggle_stock(&mut self.inventory, name);
        self.recompute();
        self.push(Field::Inventory).await?;

        Ok(in_stock)
    }

    /// Adds a hand-written shopping entry and returns its id.
    pub async fn add_extra(
        &mut self,
        name: &str,
        qty: &str,
        unit: &str,
    ) -> mealsync_shared::Result<String> {
        let name = name.trim();
        if name.is_empty() {
            mealsync_shared::user!("Item name is required");
        }

        let item = ExtraItem::new(name, qty, unit.trim());
        let id = item.id.to_owned();
        self.extra_list.push(item);
        self.recompute();
        self.push(Field::ExtraList).await?;

        Ok(id)
    }

    pub async fn remove_extra(&mut self, id: &str) -> mealsync_shared::Result<()> {
        let Some(position) = self.extra_list.iter().position(|e| e.id == id) else {
            mealsync_shared::not_found!("extra item not found");
        };

        self.extra_list.remove(position);
        self.recompute();
        self.push(Field::ExtraList).await
    }

    pub fn recipes(&self) -> &Catalog {
        &self.recipes
    }

    pub fn schedule(&self) -> &ScheduleMap {
        &self.schedule
    }

    pub fn inventory(&self) -> &InventoryMap {
        &self.inventory
    }

    pub fn custom_units(&self) -> &CustomUnitMap {
        &self.custom_units
    }

    pub fn extra_list(&self) -> &[ExtraItem] {
        &self.extra_list
    }

    pub fn shopping(&self) -> &ShoppingView {
        &self.shopping
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    /// Slots of the planner grid, as configured.
    pub fn slots(&self) -> Vec<SlotKey> {
        SlotKey::grid(self.config.weeks)
    }

    /// Recipe planned for a slot, if it still exists.
    pub fn assigned(&self, slot: SlotKey) -> Option<&Recipe> {
        self.schedule
            .get(&slot.to_string())
            .and_then(|id| id.as_deref())
            .and_then(|id| self.recipes.find(id))
    }

    pub fn resolve_unit(&self, name: &str) -> &str {
        UnitRegistry::new(&self.custom_units, &self.recipes).resolve_unit(name)
    }

    /// Catalog ingredient names that have stock on hand.
    pub fn stocked_ingredients(&self) -> Vec<String> {
        self.recipes
            .ingredient_names()
            .into_iter()
            .filter(|name| self.inventory.contains_key(name))
            .collect()
    }

    /// The full document as it should be stored.
    pub fn document(&self) -> PlannerDocument {
        PlannerDocument {
            recipes: self.recipes.to_vec(),
            schedule: self.schedule.clone(),
            inventory: InventoryPayload::Current(self.inventory.clone()),
            custom_units: self.custom_units.clone(),
            extra_list: self.extra_list.clone(),
        }
    }
}
