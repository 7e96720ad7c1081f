// src/application/detail_controller.rs
//
// Detail screen: shows one movie and edits its favorite flag in place.
// There is no save step; writes go straight through the live handle.

use log::debug;

use crate::application::dto::MovieDetailDto;
use crate::application::error_handling::ErrorResponse;
use crate::error::{AppError, AppResult};
use crate::services::{CatalogStore, MovieHandle};

/// Whether the requested movie was resolved
#[derive(Debug, Clone)]
pub enum DetailState {
    Found(MovieHandle),
    /// Terminal, display-only
    NotFound { movie_id: String },
}

/// What the detail screen renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Movie(MovieDetailDto),
    NotFound(ErrorResponse),
}

#[derive(Debug, Clone)]
pub struct DetailController {
    state: DetailState,
}

impl DetailController {
    /// Look the movie up in the displayed collection
    pub fn resolve(store: &CatalogStore, movie_id: &str) -> Self {
        let state = match store.item_at(movie_id) {
            Ok(handle) => DetailState::Found(handle),
            Err(err) => {
                debug!("Detail lookup failed: {}", err);
                DetailState::NotFound {
                    movie_id: movie_id.to_string(),
                }
            }
        };

        Self { state }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_found(&self) -> bool {
        matches!(self.state, DetailState::Found(_))
    }

    /// Current rendering. A movie deleted after the screen opened renders
    /// as not found.
    pub fn view(&self) -> DetailView {
        match self.handle().and_then(MovieHandle::get) {
            Ok(movie) => DetailView::Movie(MovieDetailDto::from(movie)),
            Err(err) => DetailView::NotFound(ErrorResponse::from_app_error(err)),
        }
    }

    pub fn set_favorite(&self, is_favorite: bool) -> AppResult<()> {
        self.handle()?.set_favorite(is_favorite)
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&self) -> AppResult<bool> {
        self.handle()?.toggle_favorite()
    }

    fn handle(&self) -> AppResult<&MovieHandle> {
        match &self.state {
            DetailState::Found(handle) => Ok(handle),
            DetailState::NotFound { movie_id } => Err(AppError::MovieNotFound(movie_id.clone())),
        }
    }
}
