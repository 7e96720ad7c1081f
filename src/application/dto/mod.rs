// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are presentation-friendly, serializable snapshots
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::Movie;

// ============================================================================
// LIST DTOs
// ============================================================================

/// One row of the movie list: poster and title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRowDto {
    pub id: String,
    pub name: String,
    pub image_name: String,
}

impl From<&Movie> for MovieRowDto {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.clone(),
            name: movie.name.clone(),
            image_name: movie.image_name.clone(),
        }
    }
}

// ============================================================================
// DETAIL DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetailDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_favorite: bool,
    pub image_name: String,
}

impl From<Movie> for MovieDetailDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            description: movie.description,
            is_favorite: movie.is_favorite,
            image_name: movie.image_name,
        }
    }
}

// ============================================================================
// ADD FLOW DTOs
// ============================================================================

/// Everything the add form shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFormDto {
    pub choices: Vec<MovieRowDto>,
    pub selected_id: Option<String>,
    pub name: String,
    pub description: String,
    pub image_name: String,
    pub is_favorite: bool,
    pub can_add: bool,
    pub prompt: Option<String>,
}
