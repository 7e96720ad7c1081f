// src/application/commands/session.rs
//
// Routes user intents to the controller that owns them.
//
// RULES:
// - Holds which screen is open, never a copy of movie state
// - Intents aimed at a screen that is not open are ignored
// - Never contains business logic

use log::{debug, warn};

use crate::application::add_controller::AddController;
use crate::application::detail_controller::DetailController;
use crate::application::list_controller::ListController;
use crate::application::state::AppState;
use crate::error::AppResult;

use super::intents::UserIntent;

/// The screen on top of the list, if any
pub enum Screen {
    List,
    Detail(DetailController),
    Add(AddController),
}

pub struct Session {
    list: ListController,
    screen: Screen,
}

impl Session {
    pub fn new(state: &AppState) -> Self {
        Self {
            list: ListController::new(state.store.clone(), state.navigator.clone()),
            screen: Screen::List,
        }
    }

    pub fn list(&self) -> &ListController {
        &self.list
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn detail(&self) -> Option<&DetailController> {
        match &self.screen {
            Screen::Detail(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn add_flow(&self) -> Option<&AddController> {
        match &self.screen {
            Screen::Add(add) => Some(add),
            _ => None,
        }
    }

    /// Apply one user intent
    pub fn dispatch(&mut self, intent: UserIntent) -> AppResult<()> {
        debug!("[INTENT] {:?}", intent);

        match intent {
            UserIntent::DeleteAtOffsets { offsets } => {
                self.list.delete_at_offsets(&offsets);
            }

            UserIntent::Move { from, to } => {
                self.list.move_items(&from, to);
            }

            UserIntent::SelectMovie { movie_id } => {
                self.screen = Screen::Detail(self.list.select(&movie_id));
            }

            UserIntent::OpenAddFlow => {
                self.screen = Screen::Add(self.list.open_add_flow());
            }

            UserIntent::ChooseForAdd { movie_id } => match &mut self.screen {
                Screen::Add(add) => {
                    add.select(&movie_id);
                }
                _ => warn!("Ignoring add-flow selection: add flow is not open"),
            },

            UserIntent::SetAddFavorite { is_favorite } => match &mut self.screen {
                Screen::Add(add) => add.set_favorite(is_favorite),
                _ => warn!("Ignoring add-flow favorite: add flow is not open"),
            },

            UserIntent::ConfirmAdd => match &mut self.screen {
                Screen::Add(add) => {
                    if add.add_selected_movie()?.is_some() {
                        self.screen = Screen::List;
                    }
                }
                _ => warn!("Ignoring confirm: add flow is not open"),
            },

            UserIntent::ToggleFavorite => match &self.screen {
                Screen::Detail(detail) => {
                    detail.toggle_favorite()?;
                }
                _ => warn!("Ignoring favorite toggle: no detail screen is open"),
            },

            UserIntent::Dismiss => {
                self.screen = Screen::List;
            }
        }

        Ok(())
    }
}
