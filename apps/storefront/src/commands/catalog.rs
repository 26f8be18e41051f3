//! # Catalog Commands
//!
//! The food display: every dish with the quantity already in the cart.

use platter_core::{FoodItem, ALL_CATEGORIES};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::StoreState;

/// One card on the food display.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FoodListEntry {
    #[serde(flatten)]
    pub item: FoodItem,

    /// Units of this item in the cart (0 shows the "add" button)
    pub quantity: u32,
}

/// Food display contents.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FoodListResponse {
    /// Category the list was filtered by
    pub category: String,

    /// Every category, for the explore-menu strip
    pub categories: Vec<String>,

    pub items: Vec<FoodListEntry>,
}

/// Lists the catalog, optionally filtered to one category.
///
/// ## Arguments
/// * `category` - Menu category; `None` or `"All"` lists everything
pub fn get_food_list(
    store: &StoreState,
    category: Option<&str>,
) -> Result<FoodListResponse, ApiError> {
    let category = category.unwrap_or(ALL_CATEGORIES);
    debug!(category, "get_food_list command");

    store.with_store(|s| {
        let catalog = s.catalog();
        FoodListResponse {
            category: category.to_string(),
            categories: catalog.categories().into_iter().map(str::to_string).collect(),
            items: catalog
                .by_category(category)
                .map(|item| FoodListEntry {
                    item: item.clone(),
                    quantity: s.quantity(&item.id),
                })
                .collect(),
        }
    })
}
