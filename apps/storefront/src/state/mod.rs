//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │       StoreState         │      │       ConfigState        │        │
//! │  │                          │      │                          │        │
//! │  │  Arc<Mutex<              │      │  store_name              │        │
//! │  │    StoreContext          │      │  delivery_fee_cents      │        │
//! │  │  >>                      │      │  item_policy             │        │
//! │  └──────────────────────────┘      └──────────────────────────┘        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: Protected by Arc<Mutex<T>> for exclusive access         │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigError, ConfigState};
pub use store::StoreState;
