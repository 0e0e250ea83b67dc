//! Mapping core errors to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookshelf_core::BookshelfError;
use serde::Serialize;

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Handler error wrapping a core error
#[derive(Debug)]
pub struct ApiError(pub BookshelfError);

impl From<BookshelfError> for ApiError {
    fn from(err: BookshelfError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookshelfError::MissingParameter(_)
            | BookshelfError::InvalidParameter { .. }
            | BookshelfError::MissingFilter => StatusCode::BAD_REQUEST,
            BookshelfError::NotFound(_) => StatusCode::NOT_FOUND,
            BookshelfError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Upstream details stay in the logs
        let error = match self.0 {
            BookshelfError::Upstream(err) => {
                tracing::error!("Upstream request failed: {}", err);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
