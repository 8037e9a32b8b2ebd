use mealsync_shared::planner::{InventoryMap, InventoryPayload};

/// Brings an inventory payload to the current name-to-quantity shape.
///
/// The legacy list of in-stock names becomes one unit of each. A current map
/// is returned as is, so running this on its own output changes nothing.
/// Any other shape yields an empty inventory.
pub fn normalize_inventory(raw: InventoryPayload) -> InventoryMap {
    match raw {
        InventoryPayload::Current(inventory) => inventory,
        InventoryPayload::Legacy(names) => names.into_iter().map(|name| (name, 1.0)).collect(),
        InventoryPayload::Unknown(serde_json::Value::Null) => InventoryMap::new(),
        InventoryPayload::Unknown(value) => {
            tracing::warn!(%value, "unrecognised inventory payload, starting from empty stock");
            InventoryMap::new()
        }
    }
}

/// Sets the quantity on hand. Zero, negative or non-finite removes the item.
pub fn set_stock(inventory: &mut InventoryMap, name: &str, qty: f64) {
    if qty.is_finite() && qty > 0.0 {
        inventory.insert(name.to_owned(), qty);
    } else {
        inventory.remove(name);
    }
}

/// Adds `delta` to the quantity on hand and returns the new quantity.
pub fn adjust_stock(inventory: &mut InventoryMap, name: &str, delta: f64) -> f64 {
    let current = inventory.get(name).copied().unwrap_or(0.0);
    set_stock(inventory, name, current + delta);

    inventory.get(name).copied().unwrap_or(0.0)
}

/// In-stock/out-of-stock switch: an absent item gets one unit, a present one
/// is removed. Returns whether the item is now in stock.
pub fn toggle_stock(inventory: &mut InventoryMap, name: &str) -> bool {
    if inventory.remove(name).is_some() {
        return false;
    }

    inventory.insert(name.to_owned(), 1.0);
    true
}
