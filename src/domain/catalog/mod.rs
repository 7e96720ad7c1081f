//! Catalog Invariants:
//!
//! 1. The catalog is immutable after load
//! 2. Availability is computed by title, not by id
//! 3. Availability is always sorted by name

pub mod entity;

pub use entity::Catalog;
