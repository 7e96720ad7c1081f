use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single movie that can be shown in the list
///
/// Field names on the wire match the bundled documents
/// (`id`, `name`, `description`, `isFavorite`, `imageName`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Opaque identifier, stable for the lifetime of the movie
    pub id: String,

    /// Display title
    pub name: String,

    /// Free-form synopsis
    pub description: String,

    /// User-controlled favorite flag
    pub is_favorite: bool,

    /// Asset name resolved by the presentation layer
    pub image_name: String,
}

impl Movie {
    /// Create a movie with a freshly generated identity.
    /// New movies are never favorites.
    pub fn new(name: String, description: String, image_name: String) -> Self {
        Self {
            id: generate_movie_id(),
            name,
            description,
            is_favorite: false,
            image_name,
        }
    }

    /// Key used to compare titles between the catalog and the displayed list
    pub fn title_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// 128-bit random identifier rendered as an uppercase hyphenated string
pub fn generate_movie_id() -> String {
    Uuid::new_v4().hyphenated().to_string().to_uppercase()
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_movie_is_not_favorite() {
        let movie = Movie::new(
            "Heat".to_string(),
            "A crew of thieves.".to_string(),
            "movie_poster_3".to_string(),
        );
        assert!(!movie.is_favorite);
        assert_eq!(movie.name, "Heat");
        assert_eq!(movie.image_name, "movie_poster_3");
    }

    #[test]
    fn test_new_movies_get_distinct_ids() {
        let a = Movie::new("A".to_string(), String::new(), String::new());
        let b = Movie::new("A".to_string(), String::new(), String::new());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_deserializes_bundled_field_names() {
        let json = r#"{
            "id": "1",
            "name": "Alien",
            "description": "In space no one can hear you scream.",
            "isFavorite": true,
            "imageName": "movie_poster_1"
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, "1");
        assert!(movie.is_favorite);
        assert_eq!(movie.image_name, "movie_poster_1");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{ "id": "1", "name": "Alien", "description": "", "imageName": "x" }"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_title_key_ignores_case() {
        let movie = Movie::new("The Matrix".to_string(), String::new(), String::new());
        assert_eq!(movie.title_key(), "the matrix");
    }
}
