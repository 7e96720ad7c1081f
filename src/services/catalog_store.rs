// src/services/catalog_store.rs
//
// Catalog Store - Single Source of Truth
//
// RULES:
// - Owns the displayed collection; nobody else keeps a mutable copy
// - The catalog is read-only after construction
// - Every applied mutation emits exactly one event
// - Events are emitted after the collection lock is released

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};

use crate::domain::{Catalog, DisplayedCollection, Movie};
use crate::error::{AppError, AppResult};
use crate::events::{
    CollectionInitialized, EventBus, FavoriteChanged, MovieAppended, MoviesMoved, MoviesRemoved,
};

/// Holds the full catalog and the displayed collection.
///
/// Cloning is cheap and yields another handle onto the same state.
#[derive(Clone)]
pub struct CatalogStore {
    catalog: Arc<Catalog>,
    displayed: Arc<RwLock<DisplayedCollection>>,
    event_bus: Arc<EventBus>,
}

impl CatalogStore {
    /// Build the store and copy the seed into the displayed collection.
    ///
    /// This is the only way to initialize a store, so initialization
    /// happens exactly once per session.
    pub fn initialize(catalog: Catalog, seed: &[Movie], event_bus: Arc<EventBus>) -> Self {
        let displayed = DisplayedCollection::from_seed(seed);
        let count = displayed.len();

        info!(
            "Catalog store initialized: {} displayed, {} in catalog",
            count,
            catalog.len()
        );

        let store = Self {
            catalog: Arc::new(catalog),
            displayed: Arc::new(RwLock::new(displayed)),
            event_bus,
        };

        store.event_bus.emit(CollectionInitialized::new(count));
        store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    fn read(&self) -> RwLockReadGuard<'_, DisplayedCollection> {
        self.displayed.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DisplayedCollection> {
        self.displayed.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the displayed collection, in order
    pub fn displayed(&self) -> Vec<Movie> {
        self.read().movies().to_vec()
    }

    /// Run `f` against the displayed movies without copying them
    pub fn with_displayed<R>(&self, f: impl FnOnce(&[Movie]) -> R) -> R {
        f(self.read().movies())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Add a movie to the end of the displayed collection
    pub fn append(&self, movie: Movie) {
        let (movie_id, name) = (movie.id.clone(), movie.name.clone());

        let position = {
            let mut displayed = self.write();
            displayed.push(movie);
            displayed.len() - 1
        };

        debug!("Appended '{}' ({}) at {}", name, movie_id, position);
        self.event_bus.emit(MovieAppended::new(movie_id, name, position));
    }

    /// Remove the movies at `offsets`, all measured against the current
    /// list. Out-of-range offsets are ignored. Returns how many were removed.
    pub fn remove_at(&self, offsets: &BTreeSet<usize>) -> usize {
        let (removed, remaining) = {
            let mut displayed = self.write();
            let removed = displayed.remove_at(offsets);
            (removed, displayed.len())
        };

        let ignored = offsets.len() - removed.len();
        if ignored > 0 {
            warn!("Ignored {} out-of-range offset(s) in remove", ignored);
        }

        if removed.is_empty() {
            return 0;
        }

        let removed_ids: Vec<String> = removed.into_iter().map(|m| m.id).collect();
        let count = removed_ids.len();
        debug!("Removed {:?}, {} remaining", removed_ids, remaining);
        self.event_bus.emit(MoviesRemoved::new(removed_ids, remaining));
        count
    }

    /// Relocate the movies at `from` into a contiguous block starting at
    /// `to`, where `to` counts positions with the moved movies taken out.
    /// A move that would leave the order as it is changes nothing and
    /// emits nothing.
    pub fn move_items(&self, from: &BTreeSet<usize>, to: usize) {
        let outcome = self.write().move_items(from, to);

        match outcome {
            Some(outcome) => {
                debug!(
                    "Moved {:?} to position {}",
                    outcome.moved_ids, outcome.destination
                );
                self.event_bus.emit(MoviesMoved::new(outcome.moved_ids, outcome.destination));
            }
            None => debug!("Move of {:?} to {} left the order unchanged", from, to),
        }
    }

    /// Live handle onto the displayed movie with `id`
    pub fn item_at(&self, id: &str) -> AppResult<MovieHandle> {
        if self.read().position_of(id).is_none() {
            return Err(AppError::MovieNotFound(id.to_string()));
        }

        Ok(MovieHandle {
            store: self.clone(),
            id: id.to_string(),
        })
    }

    /// Catalog movies not yet displayed (by title), sorted by name
    pub fn available(&self) -> Vec<Movie> {
        self.with_displayed(|displayed| self.catalog.available_for(displayed))
    }

    fn read_movie(&self, id: &str) -> AppResult<Movie> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::MovieNotFound(id.to_string()))
    }

    fn write_favorite(&self, id: &str, is_favorite: bool) -> AppResult<()> {
        {
            let mut displayed = self.write();
            let movie = displayed
                .get_mut(id)
                .ok_or_else(|| AppError::MovieNotFound(id.to_string()))?;
            if movie.is_favorite == is_favorite {
                return Ok(());
            }
            movie.is_favorite = is_favorite;
        }

        self.event_bus.emit(FavoriteChanged::new(id.to_string(), is_favorite));
        Ok(())
    }
}

/// A live reference to one movie in the displayed collection.
///
/// The handle is addressed by id, not by position, so it stays valid
/// across reorders. Every read goes back to the store and every write lands
/// in the store, so all holders observe the same state. Once the movie is
/// removed the handle reports `MovieNotFound`.
#[derive(Clone)]
pub struct MovieHandle {
    store: CatalogStore,
    id: String,
}

impl MovieHandle {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current state of the movie
    pub fn get(&self) -> AppResult<Movie> {
        self.store.read_movie(&self.id)
    }

    pub fn is_favorite(&self) -> AppResult<bool> {
        Ok(self.get()?.is_favorite)
    }

    pub fn set_favorite(&self, is_favorite: bool) -> AppResult<()> {
        self.store.write_favorite(&self.id, is_favorite)
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&self) -> AppResult<bool> {
        let next = !self.is_favorite()?;
        self.set_favorite(next)?;
        Ok(next)
    }
}

impl std::fmt::Debug for MovieHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieHandle").field("id", &self.id).finish()
    }
}
