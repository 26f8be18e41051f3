//! # Platter Storefront Library
//!
//! Host for the Platter storefront: configuration, logging, session state
//! and the commands each view calls.
//!
//! ## Module Organization
//! ```text
//! platter_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Session store context behind a mutex
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Food display
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── order.rs    ◄─── Totals and order placement
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── shell.rs        ◄─── Route shell (/, /cart, /PlaceOrder)
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use platter_core::Catalog;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use error::StartupError;
use shell::Shell;
use state::{ConfigState, StoreState};

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ─────── tracing-subscriber, RUST_LOG, stderr     │
/// │  2. Load Configuration ─────── PLATTER_* environment variables          │
/// │  3. Load Catalog ───────────── explicit path, data dir, or bundled      │
/// │  4. Create Session State ───── StoreState with an empty cart            │
/// │  5. Run Shell ──────────────── until EOF or `quit`                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    info!("Starting Platter storefront");

    let config = ConfigState::from_env()?;
    info!(store = %config.store_name, policy = ?config.item_policy, "Configuration loaded");

    let catalog = load_catalog(&config)?;
    info!(items = catalog.len(), "Catalog loaded");

    let store = StoreState::new(catalog, config.store_options());
    store
        .with_store_mut(|s| {
            s.subscribe(|change| {
                debug!(
                    event = ?change.event,
                    id = ?change.id,
                    quantity = change.quantity,
                    subtotal = change.totals.subtotal.cents(),
                    "cart changed"
                );
            })
        })?;

    let mut shell = Shell::new(store, config)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    shell.run(stdin, tokio::io::stdout()).await?;

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=platter=trace` - Show trace for platter crates only
/// - Default: INFO, with DEBUG for platter crates
///
/// Logs go to stderr so the views on stdout stay readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,platter_core=debug,platter_storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the catalog for this session.
///
/// ## Resolution Order
/// 1. `config.catalog_path` (`PLATTER_CATALOG_PATH`), which must exist
/// 2. `catalog.json` in the platform data directory, if present
///    - **macOS**: `~/Library/Application Support/com.platter.storefront/`
///    - **Linux**: `~/.local/share/storefront/`
/// 3. The bundled catalog
pub fn load_catalog(config: &ConfigState) -> Result<Catalog, StartupError> {
    if let Some(path) = &config.catalog_path {
        return read_catalog(path);
    }

    if let Some(path) = data_dir_catalog().filter(|p| p.is_file()) {
        return read_catalog(&path);
    }

    debug!("Using bundled catalog");
    Ok(Catalog::bundled()?)
}

fn read_catalog(path: &Path) -> Result<Catalog, StartupError> {
    info!(?path, "Reading catalog");
    let source = std::fs::read_to_string(path).map_err(|source| StartupError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Catalog::load_json(&source)?)
}

fn data_dir_catalog() -> Option<PathBuf> {
    ProjectDirs::from("com", "platter", "storefront").map(|dirs| dirs.data_dir().join("catalog.json"))
}
