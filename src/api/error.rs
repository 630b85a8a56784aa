//! HTTP error responses for the book API
//!
//! Every failure is rendered as `{"error": "..."}`. Store failures are logged
//! with their detail and answered with a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Book not found")]
    pub error: String,
}

/// A domain error tagged with the operation that produced it.
#[derive(Debug)]
pub struct ApiError {
    /// Completes "Failed to ..." in the 500 message, e.g. "fetch books"
    action: &'static str,
    error: DomainError,
}

impl ApiError {
    pub fn new(action: &'static str, error: DomainError) -> Self {
        Self { action, error }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound => StatusCode::NOT_FOUND,
            DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match &self.error {
            DomainError::Validation(msg) => msg.clone(),
            DomainError::NotFound => BOOK_NOT_FOUND.to_string(),
            DomainError::Database(_) => format!("Failed to {}", self.action),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.error {
            DomainError::Database(detail) => {
                tracing::error!("Failed to {}: {}", self.action, detail);
            }
            other => tracing::debug!("Rejected request to {}: {}", self.action, other),
        }

        let body = ErrorResponse {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
