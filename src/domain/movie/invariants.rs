use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_id(&movie.id)?;
    validate_name(&movie.name)?;
    Ok(())
}

fn validate_id(id: &str) -> DomainResult<()> {
    if id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Identity is immutable once assigned
/// 2. Name cannot be empty
/// 3. Description and image name are free-form
/// 4. Favorite flag is the only field the user edits
