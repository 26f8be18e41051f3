//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - Startup (store name in the navbar)
/// - Currency formatting in every view
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
