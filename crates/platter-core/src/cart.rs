//! # Cart
//!
//! Quantities the shopper has chosen, keyed by food item id.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  View Action              Cart Call               Quantity Change       │
//! │  ───────────              ─────────               ───────────────       │
//! │                                                                         │
//! │  Click "+" ──────────────► add("1") ────────────► 0 → 1, 1 → 2 ...      │
//! │                                                                         │
//! │  Click "-" ──────────────► remove("1") ─────────► 2 → 1, 1 → (pruned)   │
//! │                                                                         │
//! │  Place order ────────────► clear() ─────────────► every line dropped    │
//! │                                                                         │
//! │  Render ─────────────────► quantity("1") ───────► 0 when absent         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A key is present if and only if its quantity is > 0
//! - Quantities never exceed [`MAX_ITEM_QUANTITY`]
//! - At most [`MAX_CART_LINES`] distinct ids, each a valid item id
//! - The cart knows nothing about prices; see [`crate::totals`]

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_item_id;
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

/// The shopping cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: BTreeMap::new(),
        }
    }

    /// Adds one unit of `id`, creating the line if absent.
    ///
    /// ## Returns
    /// The new quantity. The cart is left unchanged on error.
    ///
    /// ## Errors
    /// - `QuantityTooLarge` when the line is already at the ceiling
    /// - `CartTooLarge` when a new line would exceed [`MAX_CART_LINES`]
    /// - `Validation` for an empty or overlong id
    pub fn add(&mut self, id: &str) -> CoreResult<u32> {
        let current = self.quantity(id);
        if current == 0 {
            validate_item_id(id)?;
            if self.items.len() >= MAX_CART_LINES {
                return Err(CoreError::CartTooLarge {
                    max: MAX_CART_LINES,
                });
            }
        }
        if current >= MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                id: id.to_string(),
                max: MAX_ITEM_QUANTITY,
            });
        }

        let quantity = current + 1;
        self.items.insert(id.to_string(), quantity);
        Ok(quantity)
    }

    /// Removes one unit of `id`, dropping the line when it reaches zero.
    ///
    /// Absent ids are a no-op. Returns the new quantity.
    pub fn remove(&mut self, id: &str) -> u32 {
        match self.items.get_mut(id) {
            Some(quantity) if *quantity > 1 => {
                *quantity -= 1;
                *quantity
            }
            Some(_) => {
                self.items.remove(id);
                0
            }
            None => 0,
        }
    }

    /// Quantity of `id`, zero when absent.
    pub fn quantity(&self, id: &str) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Whether `id` currently has a line.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Every line as `(id, quantity)`, ordered by id. Quantities are > 0.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, &qty)| (id.as_str(), qty))
    }

    /// A copy of the lines, for handing to views.
    pub fn items(&self) -> BTreeMap<String, u32> {
        self.items.clone()
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
