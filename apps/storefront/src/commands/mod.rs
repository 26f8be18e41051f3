//! # Commands Module
//!
//! Every interaction a view can have with the session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Food display listing
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── order.rs    ◄─── Totals and order placement
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes exactly the state it needs, by reference:
//! ```rust,ignore
//! // Only needs the store
//! fn get_cart(store: &StoreState) -> Result<CartResponse, ApiError>
//!
//! // Only needs config
//! fn get_config(config: &ConfigState) -> ConfigState
//! ```
//! Views never reach for a global; whoever builds a view hands it the
//! states.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod order;
