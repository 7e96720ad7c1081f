// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the store; the boundary to the presentation layer
// - Controllers read and write only through CatalogStore
// - Translates domain entities into DTOs

pub mod add_controller;
pub mod commands;
pub mod detail_controller;
pub mod dto;
pub mod error_handling;
pub mod list_controller;
pub mod navigation;
pub mod state;

pub use add_controller::{AddController, MovieDraft, DEFAULT_IMAGE_NAME, NO_SELECTION_PROMPT};
pub use commands::{Screen, Session, UserIntent};
pub use detail_controller::{DetailController, DetailState, DetailView};
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use list_controller::{ListController, LIST_TITLE};
pub use navigation::{NavigationIntent, NavigationLog, Navigator};
pub use state::AppState;
