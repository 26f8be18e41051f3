//! # Totals
//!
//! Figures derived from the cart and the catalog. Nothing here is stored;
//! every call recomputes from the current cart.
//!
//! ```text
//! subtotal     = Σ quantity × price   (ids missing from the catalog skipped)
//! delivery_fee = 0 if subtotal == 0 else fee
//! total        = 0 if subtotal == 0 else subtotal + delivery_fee
//! ```
//!
//! Catalog prices are capped at load, so a full cart stays well inside
//! `i64`; [`Money`] arithmetic saturates beyond that, so totals never fail.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::CartLine;

/// Subtotal, delivery fee and total for one cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Totals {
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

impl Totals {
    /// Computes totals with the given flat delivery fee.
    ///
    /// ```rust
    /// use platter_core::{Cart, Catalog, Money, Totals};
    ///
    /// let catalog = Catalog::load_json(
    ///     r#"[{"_id":"1","name":"A","price":1000},{"_id":"2","name":"B","price":500}]"#,
    /// ).unwrap();
    /// let mut cart = Cart::new();
    /// cart.add("1").unwrap();
    /// cart.add("1").unwrap();
    /// cart.add("2").unwrap();
    ///
    /// let totals = Totals::compute(&cart, &catalog, Money::from_cents(200));
    /// assert_eq!(totals.subtotal.cents(), 2500);
    /// assert_eq!(totals.total.cents(), 2700);
    /// ```
    pub fn compute(cart: &Cart, catalog: &Catalog, delivery_fee: Money) -> Self {
        let subtotal = subtotal(cart, catalog);

        if subtotal.is_zero() {
            return Totals::default();
        }

        Totals {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }
}

/// Sum of `quantity × price` over the cart.
///
/// Ids without a catalog entry contribute nothing. The cart accepts ids
/// the catalog does not know under the permissive policy, so a miss here
/// is expected rather than an error.
pub fn subtotal(cart: &Cart, catalog: &Catalog) -> Money {
    cart.iter()
        .filter_map(|(id, quantity)| match catalog.get(id) {
            Some(item) => Some(item.price.multiply_quantity(quantity)),
            None => {
                tracing::debug!(id, quantity, "skipping cart id missing from catalog");
                None
            }
        })
        .sum()
}

/// Rows for the cart page: known items with a quantity, in catalog order.
pub fn line_items(cart: &Cart, catalog: &Catalog) -> Vec<CartLine> {
    catalog
        .items()
        .iter()
        .filter_map(|item| match cart.quantity(&item.id) {
            0 => None,
            quantity => Some(CartLine::from_item(item, quantity)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FoodItem;
    use crate::{DEFAULT_DELIVERY_FEE, MAX_CART_LINES, MAX_ITEM_QUANTITY, MAX_PRICE};

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            FoodItem::new("1", "Ten", Money::from_cents(1000)),
            FoodItem::new("2", "Five", Money::from_cents(500)),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let totals = Totals::compute(&Cart::new(), &catalog(), DEFAULT_DELIVERY_FEE);
        assert_eq!(totals, Totals::default());
        assert!(totals.subtotal.is_zero());
        assert!(totals.delivery_fee.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_subtotal_and_fee() {
        let mut cart = Cart::new();
        cart.add("1").unwrap();
        cart.add("1").unwrap();
        cart.add("2").unwrap();

        let totals = Totals::compute(&cart, &catalog(), DEFAULT_DELIVERY_FEE);
        assert_eq!(totals.subtotal.cents(), 2500);
        assert_eq!(totals.delivery_fee.cents(), 200);
        assert_eq!(totals.total.cents(), 2700);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let mut cart = Cart::new();
        cart.add("ghost").unwrap();
        assert!(subtotal(&cart, &catalog()).is_zero());
        assert_eq!(
            Totals::compute(&cart, &catalog(), DEFAULT_DELIVERY_FEE),
            Totals::default()
        );

        cart.add("2").unwrap();
        assert_eq!(subtotal(&cart, &catalog()).cents(), 500);
    }

    #[test]
    fn test_line_items_follow_catalog_order() {
        let mut cart = Cart::new();
        cart.add("2").unwrap();
        cart.add("1").unwrap();
        cart.add("1").unwrap();
        cart.add("ghost").unwrap();

        let lines = line_items(&cart, &catalog());
        let ids: Vec<&str> = lines.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(lines[0].line_total.cents(), 2000);
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn test_full_cart_at_price_ceiling() {
        let items = (0..MAX_CART_LINES)
            .map(|i| FoodItem::new(format!("{}", i), "Caviar", MAX_PRICE))
            .collect();
        let catalog = Catalog::from_items(items).unwrap();

        let mut cart = Cart::new();
        for item in catalog.items() {
            for _ in 0..MAX_ITEM_QUANTITY {
                cart.add(&item.id).unwrap();
            }
        }

        let expected = MAX_PRICE.cents() * i64::from(MAX_ITEM_QUANTITY) * MAX_CART_LINES as i64;
        let totals = Totals::compute(&cart, &catalog, DEFAULT_DELIVERY_FEE);
        assert_eq!(totals.subtotal.cents(), expected);
        assert_eq!(totals.total.cents(), expected + DEFAULT_DELIVERY_FEE.cents());
    }

    #[test]
    fn test_huge_delivery_fee_saturates() {
        let mut cart = Cart::new();
        cart.add("1").unwrap();

        let totals = Totals::compute(&cart, &catalog(), Money::from_cents(i64::MAX));
        assert_eq!(totals.subtotal.cents(), 1000);
        assert_eq!(totals.total.cents(), i64::MAX);
    }
}
