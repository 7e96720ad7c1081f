// src/application/commands/intents.rs
//
// Incoming user intents. This enum is the whole surface the presentation
// layer can drive.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum UserIntent {
    /// Swipe-to-delete on the list
    DeleteAtOffsets { offsets: BTreeSet<usize> },

    /// Drag-and-drop reorder on the list
    Move { from: BTreeSet<usize>, to: usize },

    /// Tap on a list row
    SelectMovie { movie_id: String },

    /// Tap on the "Add" affordance
    OpenAddFlow,

    /// Picker change inside the add flow
    ChooseForAdd { movie_id: String },

    /// Favorite switch inside the add flow
    SetAddFavorite { is_favorite: bool },

    /// "Add Movie" inside the add flow
    ConfirmAdd,

    /// Favorite switch on the detail screen
    ToggleFavorite,

    /// The presentation layer went back to the list on its own
    Dismiss,
}
