//! # Error Types
//!
//! Domain-specific error types for platter-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  platter-core errors (this file)                                       │
//! │  ├── CoreError        - Store and cart rule violations                 │
//! │  ├── CatalogError     - Catalog failed to load                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the views see (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError/CoreError → ApiError → View      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations only fail for rule violations (unknown item under the
//! strict policy, quantity ceiling). Totals never fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Store and cart errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A mutation referenced an id that is not in the catalog.
    ///
    /// ## When This Occurs
    /// Only under [`ItemPolicy::Strict`](crate::ItemPolicy::Strict). The
    /// permissive policy accepts unknown ids and totals skip them.
    #[error("Unknown food item: {0}")]
    UnknownItem(String),

    /// Adding one more would push a line past the quantity ceiling.
    #[error("Quantity for {id} cannot exceed {max}")]
    QuantityTooLarge { id: String, max: u32 },

    /// Adding a new line would exceed the cart's line limit.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// An order was requested for an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Catalog load failure (wraps CatalogError).
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Catalog Error
// =============================================================================

/// The catalog source could not be turned into a usable catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source is not a JSON array of food items.
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An item parsed but broke a catalog rule.
    #[error("Invalid catalog item at index {index}: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., an email without `@`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two catalog items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownItem("42".to_string());
        assert_eq!(err.to_string(), "Unknown food item: 42");

        let err = CoreError::QuantityTooLarge {
            id: "1".to_string(),
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity for 1 cannot exceed 999");

        let err = CoreError::CartTooLarge { max: 100 };
        assert_eq!(err.to_string(), "Cart cannot have more than 100 items");
    }

    #[test]
    fn test_catalog_error_names_index() {
        let err = CatalogError::InvalidItem {
            index: 3,
            source: ValidationError::MustBePositive {
                field: "price".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid catalog item at index 3: price must be positive"
        );
    }

    #[test]
    fn test_conversions_into_core_error() {
        let core_err: CoreError = ValidationError::Required {
            field: "email".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));

        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let core_err: CoreError = CatalogError::from(json_err).into();
        assert!(matches!(core_err, CoreError::Catalog(CatalogError::Malformed(_))));
    }
}
