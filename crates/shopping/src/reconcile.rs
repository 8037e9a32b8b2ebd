use mealsync_shared::{
    planner::InventoryMap,
    shopping::{BuyEntry, RequirementEntry, ShoppingView},
};

/// Shortfalls smaller than this are float noise, not something to buy.
const EPSILON: f64 = 1e-9;

/// Offsets each requirement by the stock on hand.
///
/// Stock is looked up by the requirement's display name, exactly: an
/// inventory entry spelled with different casing does not count. Every
/// requirement appears in `total`; only those still short appear in `buy`.
///
/// `buy_qty` is `max(0, qty - stock_qty)` with two adjustments. A stock
/// entry at or below zero counts as no stock, so it can never raise the
/// amount to buy. A shortfall within `EPSILON` is float noise from summing
/// fractions (`0.1 + 0.2` against `0.3` in stock) and counts as covered.
pub fn reconcile(requirements: Vec<RequirementEntry>, inventory: &InventoryMap) -> ShoppingView {
    let total = requirements
        .into_iter()
        .map(|requirement| {
            let stock_qty = inventory
                .get(&requirement.raw_name)
                .copied()
                .filter(|qty| *qty > 0.0)
                .unwrap_or(0.0);
            let shortfall = requirement.qty - stock_qty;
            let buy_qty = if shortfall > EPSILON { shortfall } else { 0.0 };

            BuyEntry {
                requirement,
                buy_qty,
                stock_qty,
            }
        })
        .collect::<Vec<_>>();

    let buy = total.iter().filter(|e| e.buy_qty > 0.0).cloned().collect();

    ShoppingView { total, buy }
}

#[cfg(test)]
mod tests {
    use mealsync_shared::shopping::Origin;

    use super::*;

    fn requirement(name: &str, qty: f64) -> RequirementEntry {
        RequirementEntry {
            raw_name: name.to_owned(),
            unit: "cup".to_owned(),
            qty,
            used_in: vec!["A".to_owned()],
            origin: Origin::Recipes,
        }
    }

    #[test]
    fn test_reconcile_partial_stock() {
        let inventory = InventoryMap::from([("Milk".to_owned(), 1.0)]);

        let view = reconcile(vec![requirement("Milk", 2.0)], &inventory);

        assert_eq!(view.total.len(), 1);
        assert_eq!(view.buy.len(), 1);
        assert_eq!(view.buy[0].stock_qty, 1.0);
        assert_eq!(view.buy[0].buy_qty, 1.0);
    }

    #[test]
    fn test_reconcile_covered_requirement_only_in_total() {
        let inventory = InventoryMap::from([("Milk".to_owned(), 5.0)]);

        let view = reconcile(vec![requirement("Milk", 2.0), requirement("Oats", 1.0)], &inventory);

        assert_eq!(view.total.len(), 2);
        assert_eq!(view.total[0].buy_qty, 0.0);
        assert!(view.total[0].is_in_stock());
        assert_eq!(
            view.buy.iter().map(|e| e.raw_name.as_str()).collect::<Vec<_>>(),
            vec!["Oats"]
        );
    }

    #[test]
    fn test_reconcile_lookup_is_case_sensitive() {
        let inventory = InventoryMap::from([("milk".to_owned(), 5.0)]);

        let view = reconcile(vec![requirement("Milk", 2.0)], &inventory);

        assert_eq!(view.buy[0].stock_qty, 0.0);
        assert_eq!(view.buy[0].buy_qty, 2.0);
    }

    #[test]
    fn test_reconcile_ignores_float_noise() {
        let inventory = InventoryMap::from([("Milk".to_owned(), 0.3)]);

        let view = reconcile(vec![requirement("Milk", 0.1 + 0.2)], &inventory);

        assert!(view.buy.is_empty());
    }

    #[test]
    fn test_reconcile_buy_qty_never_negative() {
        let inventory = InventoryMap::from([("Milk".to_owned(), 10.0), ("Oats".to_owned(), -3.0)]);

        let view = reconcile(
            vec![requirement("Milk", 2.0), requirement("Oats", 1.0), requirement("Salt", 0.0)],
            &inventory,
        );

        for entry in view.total.iter() {
            assert!(entry.buy_qty >= 0.0);
            if entry.stock_qty >= entry.qty {
                assert_eq!(entry.buy_qty, 0.0);
            }
        }
        assert_eq!(view.total[1].stock_qty, 0.0);
        assert_eq!(view.total[1].buy_qty, 1.0);
    }
}
