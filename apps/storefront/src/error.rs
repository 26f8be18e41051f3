//! # API Error Type
//!
//! Unified error type for storefront commands, plus the startup error the
//! binary reports before any view is shown.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Platter                                │
//! │                                                                         │
//! │  View                        Command                                    │
//! │  ────                        ───────                                    │
//! │  "add 42"  ──────────────►  add_to_cart() -> Result<T, ApiError>        │
//! │                                   │                                     │
//! │                 CoreError::UnknownItem("42") ──► ApiError NOT_FOUND     │
//! │                 ValidationError (form)       ──► ApiError VALIDATION    │
//! │                 poisoned session lock        ──► ApiError INTERNAL      │
//! │                                   │                                     │
//! │  ◄──────── { "code": "NOT_FOUND", "message": "..." } ◄──┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use platter_core::{CatalogError, CoreError};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::state::ConfigError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Food item not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Catalog could not be loaded
    CatalogError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownItem(id) => ApiError::not_found("Food item", &id),
            CoreError::QuantityTooLarge { id, max } => ApiError::new(
                ErrorCode::CartError,
                format!("Quantity for {} cannot exceed {}", id, max),
            ),
            CoreError::CartTooLarge { max } => ApiError::cart(format!(
                "Cart cannot have more than {} items",
                max
            )),
            CoreError::EmptyCart => ApiError::cart("Cart is empty"),
            CoreError::Catalog(e) => e.into(),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        tracing::error!("Catalog error: {}", err);
        ApiError::new(ErrorCode::CatalogError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Error
// =============================================================================

/// Failures before the shell starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Session setup failed: {0}")]
    Session(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
