//! # Store Context
//!
//! `StoreContext` is the state every view shares: the catalog, the cart
//! and the totals derived from them, plus the observers to tell when the
//! cart changes.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    StoreContext                                         │
//! │                                                                         │
//! │  catalog: Catalog        read-only, shared with every view              │
//! │  cart: Cart              private; mutated only via add_item /           │
//! │                          remove_item / clear_cart                       │
//! │  observers               called after each committed change             │
//! │                                                                         │
//! │  Views receive &StoreContext (read) or &mut StoreContext (interact).    │
//! │  There is no global instance.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Notification
//! Observers run synchronously, in subscription order, after the cart has
//! been updated. Each receives a [`CartChange`] carrying the new quantity
//! and freshly computed totals, so no observer can read a stale cart.
//! Mutations that change nothing (removing an absent id) and rejected
//! mutations do not notify.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::totals::{self, Totals};
use crate::types::{CartEvent, CartLine, FoodItem};
use crate::DEFAULT_DELIVERY_FEE;

// =============================================================================
// Options
// =============================================================================

/// How `add_item` treats ids the catalog does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ItemPolicy {
    /// Accept any id. Unknown ids sit in the cart and totals skip them.
    #[default]
    Permissive,

    /// Reject unknown ids with `CoreError::UnknownItem`.
    Strict,
}

/// Construction options for [`StoreContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub policy: ItemPolicy,
    pub delivery_fee: Money,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            policy: ItemPolicy::default(),
            delivery_fee: DEFAULT_DELIVERY_FEE,
        }
    }
}

// =============================================================================
// Observers
// =============================================================================

/// Handle returned by [`StoreContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A committed cart mutation as seen by observers.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartChange {
    pub event: CartEvent,

    /// The affected item, `None` for [`CartEvent::Cleared`].
    pub id: Option<String>,

    /// Quantity of `id` after the change.
    pub quantity: u32,

    pub totals: Totals,
}

type Observer = Box<dyn FnMut(&CartChange) + Send>;

// =============================================================================
// Store Context
// =============================================================================

/// Catalog, cart and observers for one shopping session.
pub struct StoreContext {
    catalog: Catalog,
    cart: Cart,
    options: StoreOptions,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl StoreContext {
    /// Creates a context with the permissive policy and default delivery fee.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_options(catalog, StoreOptions::default())
    }

    pub fn with_options(catalog: Catalog, options: StoreOptions) -> Self {
        StoreContext {
            catalog,
            cart: Cart::new(),
            options,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The catalog items in display order.
    pub fn food_list(&self) -> &[FoodItem] {
        self.catalog.items()
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart lines with quantity > 0.
    pub fn cart_items(&self) -> BTreeMap<String, u32> {
        self.cart.items()
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.cart.quantity(id)
    }

    /// Subtotal of the cart, excluding delivery.
    pub fn get_total_cart_amount(&self) -> Money {
        totals::subtotal(&self.cart, &self.catalog)
    }

    /// Subtotal, delivery fee and total.
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.cart, &self.catalog, self.options.delivery_fee)
    }

    /// Cart page rows in catalog order.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        totals::line_items(&self.cart, &self.catalog)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one unit of `id` and notifies observers.
    ///
    /// ## Errors
    /// - `UnknownItem` under [`ItemPolicy::Strict`] when `id` is not in the
    ///   catalog
    /// - `QuantityTooLarge` at the per-line ceiling
    /// - `CartTooLarge` when a new line would exceed the line limit
    /// - `Validation` for an empty or overlong id
    ///
    /// The cart is unchanged and no observer runs on error.
    pub fn add_item(&mut self, id: &str) -> CoreResult<u32> {
        if self.options.policy == ItemPolicy::Strict && !self.catalog.contains(id) {
            tracing::warn!(id, "rejected unknown item");
            return Err(CoreError::UnknownItem(id.to_string()));
        }

        let quantity = self.cart.add(id)?;
        tracing::debug!(id, quantity, "item added");
        self.notify(CartEvent::Added, Some(id), quantity);
        Ok(quantity)
    }

    /// Removes one unit of `id` and notifies observers.
    ///
    /// Removing an id that is not in the cart is a silent no-op. The
    /// `Result` mirrors `add_item` for callers; it is always `Ok`.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<u32> {
        if !self.cart.contains(id) {
            tracing::debug!(id, "remove ignored, item not in cart");
            return Ok(0);
        }

        let quantity = self.cart.remove(id);
        tracing::debug!(id, quantity, "item removed");
        self.notify(CartEvent::Removed, Some(id), quantity);
        Ok(quantity)
    }

    /// Empties the cart. Notifies only if there was something to clear.
    pub fn clear_cart(&mut self) {
        if self.cart.is_empty() {
            return;
        }

        self.cart.clear();
        tracing::debug!("cart cleared");
        self.notify(CartEvent::Cleared, None, 0);
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers an observer called after every committed cart change.
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use platter_core::{Catalog, StoreContext};
    ///
    /// let catalog = Catalog::load_json(r#"[{"_id":"1","name":"Soup","price":500}]"#).unwrap();
    /// let mut store = StoreContext::new(catalog);
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// store.subscribe(move |change| sink.lock().unwrap().push(change.totals.subtotal.cents()));
    ///
    /// store.add_item("1").unwrap();
    /// store.add_item("1").unwrap();
    /// assert_eq!(*seen.lock().unwrap(), vec![500, 1000]);
    /// ```
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CartChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drops an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, event: CartEvent, id: Option<&str>, quantity: u32) {
        if self.observers.is_empty() {
            return;
        }

        let change = CartChange {
            event,
            id: id.map(str::to_string),
            quantity,
            totals: self.totals(),
        };

        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }
}

impl fmt::Debug for StoreContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreContext")
            .field("catalog_items", &self.catalog.len())
            .field("cart", &self.cart)
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .finish()
    }
}
