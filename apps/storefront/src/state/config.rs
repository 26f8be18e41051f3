//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PLATTER_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use platter_core::{ItemPolicy, Money, StoreOptions, DEFAULT_DELIVERY_FEE};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConfigState {
    /// Store name shown in the navbar
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Flat delivery fee for non-empty orders, in cents
    pub delivery_fee_cents: i64,

    /// Whether unknown item ids are accepted into the cart
    pub item_policy: ItemPolicy,

    /// Catalog JSON to load instead of the bundled one
    #[ts(as = "Option<String>")]
    pub catalog_path: Option<PathBuf>,
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Platter"
    /// - Currency: $ with 2 decimals
    /// - Delivery fee: $2.00
    /// - Item policy: permissive
    /// - Catalog: bundled
    fn default() -> Self {
        ConfigState {
            store_name: "Platter".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            delivery_fee_cents: DEFAULT_DELIVERY_FEE.cents(),
            item_policy: ItemPolicy::Permissive,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PLATTER_STORE_NAME`: Override store name
    /// - `PLATTER_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PLATTER_DELIVERY_FEE`: Delivery fee in dollars (e.g., "2.50")
    /// - `PLATTER_STRICT_ITEMS`: "true" rejects ids missing from the catalog
    /// - `PLATTER_CATALOG_PATH`: Catalog JSON file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("PLATTER_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("PLATTER_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(fee) = lookup("PLATTER_DELIVERY_FEE") {
            let parsed = fee
                .parse::<Money>()
                .ok()
                .filter(|m| m.cents() >= 0)
                .ok_or_else(|| invalid("PLATTER_DELIVERY_FEE", &fee))?;
            config.delivery_fee_cents = parsed.cents();
        }

        if let Some(strict) = lookup("PLATTER_STRICT_ITEMS") {
            config.item_policy = match strict.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => ItemPolicy::Strict,
                "0" | "false" | "no" => ItemPolicy::Permissive,
                _ => return Err(invalid("PLATTER_STRICT_ITEMS", &strict)),
            };
        }

        if let Some(path) = lookup("PLATTER_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Options for the session's store context.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            policy: self.item_policy,
            delivery_fee: Money::from_cents(self.delivery_fee_cents),
        }
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use platter_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }

    pub fn format_money(&self, amount: Money) -> String {
        self.format_currency(amount.cents())
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
