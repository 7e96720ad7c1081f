// src/application/error_handling.rs
//
// Error Handling for the Presentation Boundary
//
// - Maps internal errors to presentation-safe responses
// - Provides consistent error format for the UI
// - Logs errors for debugging

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Movie lookup missed; show the fallback
    NotFound,

    /// Domain invariant violation
    DomainError,

    /// Bundled catalog could not be loaded
    CatalogLoad,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::MovieNotFound(_) => Self::not_found("Movie"),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            err @ AppError::CatalogLoad { .. } => {
                error!("{}", err);

                Self {
                    success: false,
                    error_type: ErrorType::CatalogLoad,
                    message: "Movie catalog could not be loaded".to_string(),
                    details: Some(err.to_string()),
                }
            }
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }
}
