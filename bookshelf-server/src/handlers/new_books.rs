//! New-books feed

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use bookshelf_core::Book;

/// Recently published books for the home page slider.
///
/// An empty feed is still a 200.
pub async fn new_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let config = &state.config;
    let books = bookshelf_core::new_books(
        state.upstream(),
        &config.new_books_query,
        config.new_books_limit,
    )
    .await?;
    Ok(Json(books))
}
