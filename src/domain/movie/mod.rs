pub mod entity;
pub mod invariants;

pub use entity::{generate_movie_id, Movie};
pub use invariants::validate_movie;
