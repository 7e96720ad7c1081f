// src/error/types.rs
use std::path::PathBuf;

use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A bundled catalog document is missing, malformed, or violates
    /// domain invariants. Fatal at startup.
    #[error("Could not load {}: {}", .path.display(), .reason)]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),
}

impl AppError {
    pub fn catalog_load(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        AppError::CatalogLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
