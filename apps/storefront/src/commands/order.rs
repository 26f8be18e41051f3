//! # Order Commands
//!
//! The place-order page: cart totals and the delivery form.
//!
//! ## Placement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(delivery)                                                  │
//! │       │                                                                 │
//! │       ├── form invalid? ──────► VALIDATION_ERROR (cart untouched)       │
//! │       │                                                                 │
//! │       ├── no priced lines? ───► CART_ERROR "Cart is empty"              │
//! │       │                                                                 │
//! │       └── snapshot lines + totals ──► OrderReceipt ──► clear cart       │
//! │                                                                         │
//! │  No payment and no server submission: the receipt is the result.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use platter_core::validation::validate_delivery_info;
use platter_core::{CartLine, CoreError, DeliveryInfo, Totals};
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::StoreState;

/// Confirmation of a placed order.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderReceipt {
    /// Confirmation id (UUID v4)
    pub order_id: String,

    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    pub lines: Vec<CartLine>,
    pub totals: Totals,
    pub delivery: DeliveryInfo,
}

/// Gets the subtotal, delivery fee and total shown beside the form.
pub fn get_order_summary(store: &StoreState) -> Result<Totals, ApiError> {
    debug!("get_order_summary command");
    store.with_store(|s| s.totals())
}

/// Places the order for the current cart.
///
/// ## Returns
/// The receipt; the cart is empty afterwards. On any error the cart is
/// left as it was.
pub fn place_order(store: &StoreState, delivery: DeliveryInfo) -> Result<OrderReceipt, ApiError> {
    debug!("place_order command");

    validate_delivery_info(&delivery).map_err(CoreError::from)?;

    let receipt = store.with_store_mut(|s| {
        let lines = s.cart_lines();
        if lines.is_empty() {
            return Err(ApiError::from(CoreError::EmptyCart));
        }

        let receipt = OrderReceipt {
            order_id: Uuid::new_v4().to_string(),
            placed_at: Utc::now(),
            lines,
            totals: s.totals(),
            delivery,
        };

        s.clear_cart();
        Ok(receipt)
    })??;

    info!(
        order_id = %receipt.order_id,
        total = receipt.totals.total.cents(),
        lines = receipt.lines.len(),
        "Order placed"
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use platter_core::{Catalog, FoodItem, Money, StoreOptions};

    fn store() -> StoreState {
        let catalog = Catalog::from_items(vec![
            FoodItem::new("1", "Ten", Money::from_cents(1000)),
            FoodItem::new("2", "Five", Money::from_cents(500)),
        ])
        .unwrap();
        StoreState::new(catalog, StoreOptions::default())
    }

    fn delivery() -> DeliveryInfo {
        DeliveryInfo {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            street: "1 Navy Way".to_string(),
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            zip_code: "22202".to_string(),
            country: "USA".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_summary_of_empty_cart() {
        assert_eq!(get_order_summary(&store()).unwrap(), Totals::default());
    }

    #[test]
    fn test_place_order_snapshots_and_clears() {
        let store = store();
        store
            .with_store_mut(|s| {
                s.add_item("1")?;
                s.add_item("1")?;
                s.add_item("2")
            })
            .unwrap()
            .unwrap();

        let receipt = place_order(&store, delivery()).unwrap();
        assert_eq!(receipt.totals.subtotal.cents(), 2500);
        assert_eq!(receipt.totals.total.cents(), 2700);
        assert_eq!(receipt.lines.len(), 2);
        assert!(Uuid::parse_str(&receipt.order_id).is_ok());

        assert!(store.with_store(|s| s.cart().is_empty()).unwrap());
        assert_eq!(get_order_summary(&store).unwrap(), Totals::default());
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = place_order(&store(), delivery()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_invalid_form_leaves_cart() {
        let store = store();
        store.with_store_mut(|s| s.add_item("2")).unwrap().unwrap();

        let mut form = delivery();
        form.email = "not-an-email".to_string();

        let err = place_order(&store, form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(store.with_store(|s| s.quantity("2")).unwrap(), 1);
    }
}
