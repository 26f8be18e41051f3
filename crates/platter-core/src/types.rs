//! # Domain Types
//!
//! Core domain types shared by the catalog, the cart and the views.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    FoodItem     │   │    CartLine     │   │  DeliveryInfo   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  _id            │   │  id             │   │  first/last     │       │
//! │  │  name           │   │  unit_price     │   │  email, phone   │       │
//! │  │  price (cents)  │   │  quantity       │   │  street, city   │       │
//! │  │  category       │   │  line_total     │   │  state, zip ... │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │   CartEvent     │  what an observer is told happened                │
//! │  │  Added/Removed  │                                                    │
//! │  │  Cleared        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Food Item
// =============================================================================

/// A purchasable item in the catalog.
///
/// The catalog JSON keys the identifier as `_id` and stores `price` in
/// cents. Items never change after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FoodItem {
    /// Unique identifier within the catalog.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Short description shown under the name.
    #[serde(default)]
    pub description: String,

    /// Image reference (asset file name or URL).
    #[serde(default)]
    pub image: String,

    /// Menu category used by the explore-menu filter.
    #[serde(default)]
    pub category: String,
}

impl FoodItem {
    /// Creates an item with empty description, image and category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        FoodItem {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            image: String::new(),
            category: String::new(),
        }
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One rendered row of the cart page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl CartLine {
    /// Builds a line from a catalog item and a quantity.
    pub fn from_item(item: &FoodItem, quantity: u32) -> Self {
        CartLine {
            id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            unit_price: item.price,
            quantity,
            line_total: item.price.multiply_quantity(quantity),
        }
    }
}

// =============================================================================
// Cart Event
// =============================================================================

/// The kind of committed cart mutation reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CartEvent {
    /// One unit was added.
    Added,
    /// One unit was removed.
    Removed,
    /// Every line was dropped.
    Cleared,
}

// =============================================================================
// Delivery Info
// =============================================================================

/// The delivery form on the place-order page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeliveryInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
}
