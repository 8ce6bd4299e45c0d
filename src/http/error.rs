//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ProgramError;
use crate::repository::RepositoryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Planning failed under a strict policy or bad data
    Planning(ProgramError),
    /// Registration store error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Repository(e) | AppError::Planning(ProgramError::Repository(e)) => {
                let status = match e {
                    RepositoryError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, ApiError::new("REPOSITORY_ERROR", e.to_string()))
            }
            AppError::Planning(e @ ProgramError::DayOverflow { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("DAY_OVERFLOW", e.to_string()),
            ),
            AppError::Planning(ProgramError::UnmappedCategories(categories)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("UNMAPPED_CATEGORIES", "no hall hosts some registered categories")
                    .with_details(categories.join(", ")),
            ),
            AppError::Planning(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", e.to_string()),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<ProgramError> for AppError {
    fn from(err: ProgramError) -> Self {
        AppError::Planning(err)
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}
