//! # Platter Storefront Entry Point
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() {
    if let Err(e) = platter_storefront::run().await {
        eprintln!("platter-storefront: {}", e);
        std::process::exit(1);
    }
}
