//! # platter-core: Pure Store State for Platter
//!
//! This crate is the **heart** of the Platter storefront. It owns the food
//! catalog, the cart quantities and the totals derived from both, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Platter Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (routes)                               │   │
//! │  │      /  (food display) ──► /cart ──► /PlaceOrder                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ platter-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  totals   │  │   store   │  │   │
//! │  │   │ FoodItem  │  │ quantities│  │ subtotal  │  │ context + │  │   │
//! │  │   │  lookup   │  │ add/remove│  │ fee/total │  │ observers │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • SYNCHRONOUS NOTIFICATION                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (FoodItem, CartLine, CartEvent)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The read-only food catalog
//! - [`cart`] - Cart quantities keyed by item id
//! - [`totals`] - Subtotal, delivery fee and total
//! - [`store`] - `StoreContext`, the explicitly passed shared state
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog and checkout field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use platter_core::{Catalog, StoreContext};
//!
//! let catalog = Catalog::load_json(
//!     r#"[{"_id":"1","name":"Soup","price":1000,"description":"","image":""},
//!         {"_id":"2","name":"Bread","price":500,"description":"","image":""}]"#,
//! ).unwrap();
//!
//! let mut store = StoreContext::new(catalog);
//! store.add_item("1").unwrap();
//! store.add_item("1").unwrap();
//! store.add_item("2").unwrap();
//!
//! assert_eq!(store.get_total_cart_amount().cents(), 2500);
//! assert_eq!(store.totals().total.cents(), 2700);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod store;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CatalogError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{CartChange, ItemPolicy, StoreContext, StoreOptions, SubscriptionId};
pub use totals::Totals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat delivery fee charged on any non-empty order ($2.00).
pub const DEFAULT_DELIVERY_FEE: Money = Money::from_cents(200);

/// Maximum quantity of a single item in the cart.
///
/// ## Business Reason
/// Prevents runaway clicks from producing absurd orders; also keeps the
/// `u32` quantity far from overflow.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Maximum number of distinct lines in a cart.
pub const MAX_CART_LINES: usize = 100;

/// Highest catalog price accepted at load time ($100,000.00).
///
/// `MAX_PRICE × MAX_ITEM_QUANTITY × MAX_CART_LINES` stays around 10^12
/// cents, far inside `i64`.
pub const MAX_PRICE: Money = Money::from_cents(10_000_000);

/// Category name that matches every item in [`Catalog::by_category`].
pub const ALL_CATEGORIES: &str = "All";
