//! # Store State
//!
//! The session's [`StoreContext`] behind a mutex, handed to every command.
//!
//! ## Thread Safety
//! The context is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several views and commands share one session
//! 2. Only one command should modify the cart at a time
//! 3. Observers run while the lock is held, so every observer has seen a
//!    change before the next command gets the lock
//!
//! A poisoned lock (an observer panicked) is reported as an internal
//! `ApiError` instead of propagating the panic.

use std::sync::{Arc, Mutex};

use platter_core::{Catalog, StoreContext, StoreOptions};

use crate::error::ApiError;

/// Shared handle to the session's store context.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<StoreContext>>,
}

impl StoreState {
    /// Creates the session store with an empty cart.
    pub fn new(catalog: Catalog, options: StoreOptions) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(StoreContext::with_options(catalog, options))),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = store_state.with_store(|store| store.totals())?;
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&StoreContext) -> R,
    {
        let store = self
            .store
            .lock()
            .map_err(|_| ApiError::internal("Store lock poisoned"))?;
        Ok(f(&store))
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|store| store.add_item("1"))??;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut StoreContext) -> R,
    {
        let mut store = self
            .store
            .lock()
            .map_err(|_| ApiError::internal("Store lock poisoned"))?;
        Ok(f(&mut store))
    }
}
