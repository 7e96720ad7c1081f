// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::services::CatalogStore;

use super::navigation::Navigator;

/// Application state built once at startup.
/// The store is the only owner of mutable movie state.
#[derive(Clone)]
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub store: CatalogStore,
    pub navigator: Arc<dyn Navigator>,
}
