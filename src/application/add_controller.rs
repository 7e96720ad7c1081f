// src/application/add_controller.rs
//
// Add flow: pick a catalog title that is not displayed yet and append a
// fresh copy of it to the list.
//
// RULES:
// - Availability is computed once, when the flow opens
// - The appended movie always gets a new id
// - Committing without a selection does nothing

use std::sync::Arc;

use log::{debug, info, warn};

use crate::application::dto::{AddFormDto, MovieRowDto};
use crate::application::navigation::{NavigationIntent, Navigator};
use crate::domain::{generate_movie_id, validate_movie, Movie};
use crate::error::AppResult;
use crate::services::CatalogStore;

/// Poster shown before anything is selected
pub const DEFAULT_IMAGE_NAME: &str = "movie_poster_1";

/// Shown instead of the form when nothing can be added
pub const NO_SELECTION_PROMPT: &str = "Select a title to continue.";

/// Working copy of the fields the new movie is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub name: String,
    pub description: String,
    pub image_name: String,
    pub is_favorite: bool,
}

impl Default for MovieDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image_name: DEFAULT_IMAGE_NAME.to_string(),
            is_favorite: false,
        }
    }
}

impl MovieDraft {
    /// Take over everything but the favorite flag
    fn fill_from(&mut self, movie: &Movie) {
        self.name = movie.name.clone();
        self.description = movie.description.clone();
        self.image_name = movie.image_name.clone();
    }
}

pub struct AddController {
    store: CatalogStore,
    navigator: Arc<dyn Navigator>,
    available: Vec<Movie>,
    selected: Option<usize>,
    draft: MovieDraft,
}

impl AddController {
    /// Open the flow and preselect the first available title
    pub fn new(store: CatalogStore, navigator: Arc<dyn Navigator>) -> Self {
        let available = store.available();
        let mut draft = MovieDraft::default();

        let selected = available.first().map(|first| {
            draft.fill_from(first);
            0
        });

        debug!("Add flow opened with {} available titles", available.len());

        Self {
            store,
            navigator,
            available,
            selected,
            draft,
        }
    }

    /// Catalog titles not yet displayed, sorted by name
    pub fn available(&self) -> &[Movie] {
        &self.available
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.map(|index| &self.available[index])
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    /// Choose another available title. Unknown ids leave the selection as
    /// it is and return `false`.
    pub fn select(&mut self, movie_id: &str) -> bool {
        let Some(index) = self.available.iter().position(|m| m.id == movie_id) else {
            warn!("Ignoring selection of unavailable movie {}", movie_id);
            return false;
        };

        if self.selected != Some(index) {
            self.selected = Some(index);
            self.draft.fill_from(&self.available[index]);
        }
        true
    }

    pub fn set_favorite(&mut self, is_favorite: bool) {
        self.draft.is_favorite = is_favorite;
    }

    pub fn can_add(&self) -> bool {
        self.selected.is_some()
    }

    pub fn prompt(&self) -> Option<&'static str> {
        if self.can_add() {
            None
        } else {
            Some(NO_SELECTION_PROMPT)
        }
    }

    pub fn form(&self) -> AddFormDto {
        AddFormDto {
            choices: self.available.iter().map(MovieRowDto::from).collect(),
            selected_id: self.selected().map(|m| m.id.clone()),
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            image_name: self.draft.image_name.clone(),
            is_favorite: self.draft.is_favorite,
            can_add: self.can_add(),
            prompt: self.prompt().map(str::to_string),
        }
    }

    /// Append a new movie built from the draft, then ask to go back.
    ///
    /// Returns the new movie's id, or `None` when nothing is selected.
    pub fn add_selected_movie(&mut self) -> AppResult<Option<String>> {
        if self.selected.is_none() {
            debug!("Add requested without a selection");
            return Ok(None);
        }

        let mut movie = Movie::new(
            self.draft.name.clone(),
            self.draft.description.clone(),
            self.draft.image_name.clone(),
        );
        movie.id = self.fresh_id();
        movie.is_favorite = self.draft.is_favorite;
        validate_movie(&movie)?;

        let id = movie.id.clone();
        info!("Adding '{}' as {}", movie.name, id);

        self.store.append(movie);
        self.navigator.navigate(NavigationIntent::Back);

        Ok(Some(id))
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_movie_id();
            if self.store.item_at(&id).is_err() {
                return id;
            }
        }
    }
}
