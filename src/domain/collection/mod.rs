//! Critical DisplayedCollection Invariants:
//!
//! 1. Every movie id is unique within the collection
//! 2. Order is user-controlled (append, remove, reorder)
//! 3. Batch offsets always refer to one consistent snapshot
//! 4. Out-of-range offsets are ignored, never fatal
//! 5. The collection is never written back to storage

pub mod entity;

use std::collections::HashSet;

pub use entity::{DisplayedCollection, MoveOutcome};

use crate::domain::movie::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates that no two movies share an id
pub fn validate_collection(movies: &[Movie]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(movies.len());
    for movie in movies {
        if !seen.insert(movie.id.as_str()) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate movie id: {}",
                movie.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str) -> Movie {
        Movie {
            id: id.to_string(),
            name: "Same".to_string(),
            description: String::new(),
            is_favorite: false,
            image_name: String::new(),
        }
    }

    #[test]
    fn test_unique_ids_pass() {
        assert!(validate_collection(&[movie("1"), movie("2")]).is_ok());
    }

    #[test]
    fn test_duplicate_ids_fail() {
        let result = validate_collection(&[movie("1"), movie("1")]);
        assert!(matches!(result, Err(DomainError::InvariantViolation(_))));
    }
}
