// src/app/bootstrap.rs
//
// Startup wiring.
//
// Loading the bundle is the only fallible step. Failure comes back as a
// CatalogLoad error for the entry point to act on; nothing here aborts.

use std::sync::Arc;

use log::info;

use crate::app::config::BundleConfig;
use crate::application::{AppState, Navigator};
use crate::domain::Catalog;
use crate::error::AppResult;
use crate::events::create_event_bus;
use crate::infrastructure::{load_bundle, CatalogBundle};
use crate::services::CatalogStore;

/// Load the bundled documents and build the application state
pub fn bootstrap(config: &BundleConfig, navigator: Arc<dyn Navigator>) -> AppResult<AppState> {
    info!("[BOOT] Loading bundle from {}", config.data_dir.display());
    let bundle = load_bundle(config)?;
    Ok(build_state(bundle, navigator))
}

/// Build the application state from an already loaded bundle
pub fn build_state(bundle: CatalogBundle, navigator: Arc<dyn Navigator>) -> AppState {
    let event_bus = Arc::new(create_event_bus());
    let store = CatalogStore::initialize(
        Catalog::new(bundle.catalog),
        &bundle.seed,
        Arc::clone(&event_bus),
    );

    AppState {
        event_bus,
        store,
        navigator,
    }
}
