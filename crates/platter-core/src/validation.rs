//! # Validation Module
//!
//! Input validation for catalog items and the delivery form.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog source (JSON)                                                  │
//! │  ├── serde: shape and types                                             │
//! │  └── THIS MODULE: id/name present, 0 < price <= MAX_PRICE, ids unique   │
//! │                                                                         │
//! │  Place-order form                                                       │
//! │  └── THIS MODULE: every field present, email has an '@'                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{DeliveryInfo, FoodItem};
use crate::MAX_PRICE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 64;
const MAX_NAME_LEN: usize = 200;
const MAX_FIELD_LEN: usize = 200;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a food item id.
///
/// ```rust
/// use platter_core::validation::validate_item_id;
///
/// assert!(validate_item_id("12").is_ok());
/// assert!(validate_item_id("  ").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a food item name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// ## Rules
/// - Must be positive; free items are not sold
/// - Must not exceed [`MAX_PRICE`], which keeps every cart total in range
///
/// ```rust
/// use platter_core::money::Money;
/// use platter_core::validation::validate_price;
/// use platter_core::MAX_PRICE;
///
/// assert!(validate_price(MAX_PRICE).is_ok());
/// assert!(validate_price(Money::from_cents(MAX_PRICE.cents() + 1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE.cents(),
        });
    }

    Ok(())
}

/// Validates one catalog item.
pub fn validate_food_item(item: &FoodItem) -> ValidationResult<()> {
    validate_item_id(&item.id)?;
    validate_item_name(&item.name)?;
    validate_price(item.price)
}

/// Validates a whole catalog, returning the index of the first bad item.
///
/// Ids must be unique across the catalog.
pub fn validate_catalog(items: &[FoodItem]) -> Result<(), (usize, ValidationError)> {
    let mut seen = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        validate_food_item(item).map_err(|e| (index, e))?;

        if !seen.insert(item.id.as_str()) {
            return Err((
                index,
                ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id.clone(),
                },
            ));
        }
    }

    Ok(())
}

// =============================================================================
// Delivery Form Validators
// =============================================================================

fn require(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}

/// Validates an email address loosely: something on both sides of one `@`.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    require("email", email)?;

    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        }),
    }
}

/// Validates the place-order form. Every field is required.
///
/// ```rust
/// use platter_core::types::DeliveryInfo;
/// use platter_core::validation::validate_delivery_info;
///
/// assert!(validate_delivery_info(&DeliveryInfo::default()).is_err());
/// ```
pub fn validate_delivery_info(info: &DeliveryInfo) -> ValidationResult<()> {
    require("first name", &info.first_name)?;
    require("last name", &info.last_name)?;
    validate_email(&info.email)?;
    require("street", &info.street)?;
    require("city", &info.city)?;
    require("state", &info.state)?;
    require("zip code", &info.zip_code)?;
    require("country", &info.country)?;
    require("phone", &info.phone)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery() -> DeliveryInfo {
        DeliveryInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            street: "12 St James's Square".to_string(),
            city: "London".to_string(),
            state: "London".to_string(),
            zip_code: "SW1Y 4JH".to_string(),
            country: "UK".to_string(),
            phone: "+44 20 7946 0000".to_string(),
        }
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("1").is_ok());
        assert!(validate_item_id("").is_err());
        assert!(validate_item_id(&"9".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());

        assert!(validate_price(MAX_PRICE).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(MAX_PRICE.cents() + 1)).unwrap_err(),
            ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 1,
                max: MAX_PRICE.cents(),
            }
        );
    }

    #[test]
    fn test_validate_catalog_rejects_duplicates() {
        let items = vec![
            FoodItem::new("1", "Soup", Money::from_cents(500)),
            FoodItem::new("2", "Bread", Money::from_cents(300)),
            FoodItem::new("1", "Soup again", Money::from_cents(700)),
        ];

        let (index, err) = validate_catalog(&items).unwrap_err();
        assert_eq!(index, 2);
        assert!(matches!(err, ValidationError::Duplicate { .. }));
    }

    #[test]
    fn test_validate_catalog_reports_first_bad_item() {
        let items = vec![
            FoodItem::new("1", "Soup", Money::from_cents(500)),
            FoodItem::new("2", "", Money::from_cents(300)),
        ];

        let (index, err) = validate_catalog(&items).unwrap_err();
        assert_eq!(index, 1);
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@b@c").is_err());
    }

    #[test]
    fn test_validate_delivery_info() {
        assert!(validate_delivery_info(&delivery()).is_ok());

        let mut missing_phone = delivery();
        missing_phone.phone = "  ".to_string();
        assert_eq!(
            validate_delivery_info(&missing_phone).unwrap_err(),
            ValidationError::Required {
                field: "phone".to_string()
            }
        );
    }
}
