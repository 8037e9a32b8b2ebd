//! Requirement aggregation and shopping reconciliation.
//!
//! Pipeline: schedule resolution → aggregation → reconciliation against the
//! pantry → hand-added extras. Everything here is a pure function of its
//! inputs and is meant to be re-run on every change.

mod aggregation;
mod collate;
mod extras;
mod inventory;
mod key;
mod reconcile;
mod schedule;
mod unit;

pub use aggregation::{Requirements, aggregate, aggregate_requirements};
pub use collate::compare_names;
pub use extras::{MANUAL_ADD, merge_extras, merge_extras_labelled};
pub use inventory::{adjust_stock, normalize_inventory, set_stock, toggle_stock};
pub use key::{AggregationKey, normalize};
pub use reconcile::reconcile;
pub use schedule::resolve;
pub use unit::{UnitRegistry, set_custom_unit};

use mealsync_shared::{
    mealplan::ScheduleMap,
    planner::InventoryMap,
    recipe::Recipe,
    shopping::{ExtraItem, ShoppingView},
};

/// Runs the whole pipeline and returns the total and to-buy lists.
pub fn shopping_list(
    recipes: &[Recipe],
    schedule: &ScheduleMap,
    inventory: &InventoryMap,
    extras: &[ExtraItem],
) -> ShoppingView {
    merge_extras(reconcile(aggregate_requirements(recipes, schedule), inventory), extras)
}
