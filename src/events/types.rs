// events/types.rs
//
// All collection events in the system.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events are emitted after the mutation is applied
// - Events carry only the data a view needs to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// COLLECTION EVENTS
// ============================================================================

/// Emitted once, when the displayed collection is created from the seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInitialized {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub count: usize,
}

impl CollectionInitialized {
    pub fn new(count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            count,
        }
    }
}

impl DomainEvent for CollectionInitialized {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CollectionInitialized" }
}

/// Emitted when a movie is appended to the end of the list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieAppended {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: String,
    pub name: String,
    pub position: usize,
}

impl MovieAppended {
    pub fn new(movie_id: String, name: String, position: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            name,
            position,
        }
    }
}

impl DomainEvent for MovieAppended {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MovieAppended" }
}

/// Emitted when a batch removal took out at least one movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviesRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub removed_ids: Vec<String>,
    pub remaining: usize,
}

impl MoviesRemoved {
    pub fn new(removed_ids: Vec<String>, remaining: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            removed_ids,
            remaining,
        }
    }
}

impl DomainEvent for MoviesRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MoviesRemoved" }
}

/// Emitted when a reorder relocated at least one movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviesMoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub moved_ids: Vec<String>,
    pub destination: usize,
}

impl MoviesMoved {
    pub fn new(moved_ids: Vec<String>, destination: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            moved_ids,
            destination,
        }
    }
}

impl DomainEvent for MoviesMoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MoviesMoved" }
}

// ============================================================================
// MOVIE EVENTS
// ============================================================================

/// Emitted when a movie's favorite flag is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: String,
    pub is_favorite: bool,
}

impl FavoriteChanged {
    pub fn new(movie_id: String, is_favorite: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            is_favorite,
        }
    }
}

impl DomainEvent for FavoriteChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FavoriteChanged" }
}
