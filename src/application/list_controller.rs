// src/application/list_controller.rs
//
// Movie list screen. Holds no state of its own: every gesture is forwarded
// to the store, every selection becomes a navigation intent.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::add_controller::AddController;
use crate::application::detail_controller::DetailController;
use crate::application::dto::MovieRowDto;
use crate::application::navigation::{NavigationIntent, Navigator};
use crate::services::CatalogStore;

pub const LIST_TITLE: &str = "Movies";

#[derive(Clone)]
pub struct ListController {
    store: CatalogStore,
    navigator: Arc<dyn Navigator>,
}

impl ListController {
    pub fn new(store: CatalogStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    pub fn title(&self) -> &'static str {
        LIST_TITLE
    }

    /// Rows in display order
    pub fn rows(&self) -> Vec<MovieRowDto> {
        self.store
            .with_displayed(|movies| movies.iter().map(MovieRowDto::from).collect())
    }

    /// Swipe-to-delete
    pub fn delete_at_offsets(&self, offsets: &BTreeSet<usize>) -> usize {
        self.store.remove_at(offsets)
    }

    /// Drag-and-drop reorder
    pub fn move_items(&self, from: &BTreeSet<usize>, to: usize) {
        self.store.move_items(from, to);
    }

    /// Open the detail screen for a movie
    pub fn select(&self, movie_id: &str) -> DetailController {
        let detail = DetailController::resolve(&self.store, movie_id);
        self.navigator
            .navigate(NavigationIntent::ShowDetail(movie_id.to_string()));
        detail
    }

    /// Open the add flow
    pub fn open_add_flow(&self) -> AddController {
        let add = AddController::new(self.store.clone(), Arc::clone(&self.navigator));
        self.navigator.navigate(NavigationIntent::ShowAddFlow);
        add
    }
}
