//! Book and author detail endpoints

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use bookshelf_core::{Author, BookDetails, BookshelfError};
use serde::Deserialize;

/// `?key=` parameter shared by the detail endpoints
#[derive(Debug, Default, Deserialize)]
pub struct KeyParams {
    pub key: Option<String>,
}

impl KeyParams {
    fn required(self) -> Result<String, BookshelfError> {
        self.key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| BookshelfError::MissingParameter("key".to_string()))
    }
}

/// A work with its authors resolved
pub async fn book_details(
    State(state): State<AppState>,
    Query(params): Query<KeyParams>,
) -> Result<Json<BookDetails>, ApiError> {
    let key = params.required()?;
    let details = bookshelf_core::book_details(
        state.upstream(),
        &key,
        state.config.client.author_concurrency,
    )
    .await?;
    Ok(Json(details))
}

/// A single author record
pub async fn author_details(
    State(state): State<AppState>,
    Query(params): Query<KeyParams>,
) -> Result<Json<Author>, ApiError> {
    let key = params.required()?;
    let author = bookshelf_core::author_details(state.upstream(), &key).await?;
    Ok(Json(author))
}
