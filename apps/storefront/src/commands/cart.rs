//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Place   │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Order   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                       place_order        │
//! │                   remove_from_cart                  (order.rs)         │
//! │                        │                                 │              │
//! │                        ▼                                 ▼              │
//! │                   clear_cart ──────────────────► (back to empty)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use platter_core::{CartLine, StoreContext, Totals};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::StoreState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    /// Rows for the cart page (catalog items only, catalog order)
    pub lines: Vec<CartLine>,

    /// Raw quantities, including ids the catalog does not know
    pub items: BTreeMap<String, u32>,

    /// Units in the cart (the navbar basket badge)
    #[ts(type = "number")]
    pub total_quantity: u64,

    pub totals: Totals,
}

impl From<&StoreContext> for CartResponse {
    fn from(store: &StoreContext) -> Self {
        CartResponse {
            lines: store.cart_lines(),
            items: store.cart_items(),
            total_quantity: store.cart().total_quantity(),
            totals: store.totals(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &StoreState) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    store.with_store(|s| CartResponse::from(s))
}

/// Adds one unit of a food item to the cart.
///
/// ## Arguments
/// * `item_id` - Catalog id of the dish
///
/// ## Returns
/// Updated cart with all lines and totals
pub fn add_to_cart(store: &StoreState, item_id: &str) -> Result<CartResponse, ApiError> {
    debug!(item_id, "add_to_cart command");

    store.with_store_mut(|s| {
        s.add_item(item_id)?;
        Ok::<CartResponse, ApiError>(CartResponse::from(&*s))
    })?
}

/// Removes one unit of a food item from the cart.
///
/// Removing something that is not in the cart succeeds and returns the
/// unchanged cart.
pub fn remove_from_cart(store: &StoreState, item_id: &str) -> Result<CartResponse, ApiError> {
    debug!(item_id, "remove_from_cart command");

    store.with_store_mut(|s| {
        s.remove_item(item_id)?;
        Ok::<CartResponse, ApiError>(CartResponse::from(&*s))
    })?
}

/// Clears all items from the cart.
pub fn clear_cart(store: &StoreState) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    store.with_store_mut(|s| {
        s.clear_cart();
        CartResponse::from(&*s)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use platter_core::{Catalog, FoodItem, ItemPolicy, Money, StoreOptions};

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            FoodItem::new("1", "Ten", Money::from_cents(1000)),
            FoodItem::new("2", "Five", Money::from_cents(500)),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_and_totals() {
        let store = StoreState::new(catalog(), StoreOptions::default());

        add_to_cart(&store, "1").unwrap();
        add_to_cart(&store, "1").unwrap();
        let cart = add_to_cart(&store, "2").unwrap();

        assert_eq!(cart.total_quantity, 3);
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.totals.subtotal.cents(), 2500);
        assert_eq!(cart.totals.total.cents(), 2700);
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let store = StoreState::new(catalog(), StoreOptions::default());
        let cart = remove_from_cart(&store, "1").unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.totals, Totals::default());
    }

    #[test]
    fn test_strict_unknown_item_is_not_found() {
        let options = StoreOptions {
            policy: ItemPolicy::Strict,
            ..StoreOptions::default()
        };
        let store = StoreState::new(catalog(), options);

        let err = add_to_cart(&store, "ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&store).unwrap().items.is_empty());
    }

    #[test]
    fn test_permissive_unknown_item_kept_out_of_lines() {
        let store = StoreState::new(catalog(), StoreOptions::default());
        let cart = add_to_cart(&store, "ghost").unwrap();

        assert!(cart.lines.is_empty());
        assert_eq!(cart.items.get("ghost"), Some(&1));
        assert!(cart.totals.total.is_zero());
    }

    #[test]
    fn test_clear_cart() {
        let store = StoreState::new(catalog(), StoreOptions::default());
        add_to_cart(&store, "2").unwrap();

        let cart = clear_cart(&store).unwrap();
        assert!(cart.lines.is_empty());
        assert_eq!(cart.total_quantity, 0);
    }
}
