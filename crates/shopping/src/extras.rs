use mealsync_shared::shopping::{BuyEntry, ExtraItem, Origin, RequirementEntry, ShoppingView};

use crate::collate::compare_names;

/// `used_in` label of hand-added items.
pub const MANUAL_ADD: &str = "Manual Add";

/// Adds hand-added items to both lists. See [`merge_extras_labelled`].
pub fn merge_extras(view: ShoppingView, extras: &[ExtraItem]) -> ShoppingView {
    merge_extras_labelled(view, extras, MANUAL_ADD)
}

/// Adds hand-added items to both lists, then re-sorts both by name.
///
/// Extra items never draw on stock: each one is needed in full.
pub fn merge_extras_labelled(
    mut view: ShoppingView,
    extras: &[ExtraItem],
    label: &str,
) -> ShoppingView {
    for extra in extras {
        let qty = if extra.qty.is_finite() { extra.qty } else { 0.0 };
        let entry = BuyEntry {
            requirement: RequirementEntry {
                raw_name: extra.name.to_owned(),
                unit: extra.unit.to_owned(),
                qty,
                used_in: vec![label.to_owned()],
                origin: Origin::Manual {
                    id: extra.id.to_owned(),
                },
            },
            buy_qty: qty.max(0.0),
            stock_qty: 0.0,
        };

        view.total.push(entry.clone());
        view.buy.push(entry);
    }

    view.total.sort_by(|a, b| compare_names(&a.raw_name, &b.raw_name));
    view.buy.sort_by(|a, b| compare_names(&a.raw_name, &b.raw_name));

    view
}
