// src/lib.rs
// MovieShelf - In-memory movie catalog browser core
//
// Architecture:
// - Domain-centric: list rules and availability live in the domain
// - Single source of truth: CatalogStore owns the displayed collection
// - Event-driven: views observe the collection through the event bus
// - Explicit: startup failures are results, not aborts
// - Application Layer: controllers and intents at the UI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod app;
pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    generate_movie_id,
    validate_collection,
    validate_movie,
    // Catalog
    Catalog,
    // Collection
    DisplayedCollection,
    DomainError,
    // Movie
    Movie,
    MoveOutcome,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, CollectionInitialized, DomainEvent, EventBus, EventLogEntry,
    FavoriteChanged, MovieAppended, MoviesMoved, MoviesRemoved,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{load_bundle, load_movies, CatalogBundle};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogStore, MovieHandle};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use app::{bootstrap, build_state, BundleConfig};

pub use application::{
    AddController, AppState, DetailController, DetailState, DetailView, ListController,
    NavigationIntent, NavigationLog, Navigator, Session, UserIntent,
};

// Re-export application submodules
pub use application::commands;
pub use application::dto;
