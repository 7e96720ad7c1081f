// src/services/mod.rs
//
// Services Module - State Ownership Layer

pub mod catalog_store;

pub use catalog_store::{CatalogStore, MovieHandle};
