// src/infrastructure/bundle_loader.rs
//
// Bundled Catalog Loading
//
// RULES:
// - The bundled documents are read once, at startup
// - Nothing is ever written back
// - Any failure is a CatalogLoad error; there is no partial mode

use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::app::config::BundleConfig;
use crate::domain::{validate_collection, validate_movie, Movie};
use crate::error::{AppError, AppResult};

/// The two documents the app boots from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBundle {
    /// Every movie that can be added
    pub catalog: Vec<Movie>,

    /// Movies shown on first launch
    pub seed: Vec<Movie>,
}

/// Read and decode a JSON document
pub fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let data = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::catalog_load(path, "file not found")
        } else {
            AppError::catalog_load(path, e)
        }
    })?;

    serde_json::from_slice(&data)
        .map_err(|e| AppError::catalog_load(path, format!("unable to parse: {}", e)))
}

/// Load a list of movies and check every movie and id uniqueness
pub fn load_movies(path: &Path) -> AppResult<Vec<Movie>> {
    let movies: Vec<Movie> = load_json(path)?;

    for movie in &movies {
        validate_movie(movie).map_err(|e| AppError::catalog_load(path, e))?;
    }
    validate_collection(&movies).map_err(|e| AppError::catalog_load(path, e))?;

    Ok(movies)
}

/// Load both the catalog and the seed described by `config`
pub fn load_bundle(config: &BundleConfig) -> AppResult<CatalogBundle> {
    let catalog_path = config.catalog_path();
    let seed_path = config.seed_path();

    let catalog = load_movies(&catalog_path)?;
    let seed = load_movies(&seed_path)?;

    info!(
        "Loaded {} catalog movies from {} and {} seed movies from {}",
        catalog.len(),
        catalog_path.display(),
        seed.len(),
        seed_path.display()
    );

    Ok(CatalogBundle { catalog, seed })
}
