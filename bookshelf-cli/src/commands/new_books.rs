//! New books command implementation

use super::{print_json, render, with_spinner};
use anyhow::{Context, Result};
use bookshelf_core::config::default_new_books_query;
use bookshelf_core::OpenLibrary;

/// List recently published books
pub async fn new_books(
    upstream: &dyn OpenLibrary,
    query: Option<&str>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let query = query
        .map(str::to_string)
        .unwrap_or_else(default_new_books_query);
    tracing::debug!("New books query: {}", query);

    let books = with_spinner(
        "Fetching new books",
        bookshelf_core::new_books(upstream, &query, limit),
    )
    .await
    .context("Failed to fetch new books")?;

    if json {
        return print_json(&books);
    }

    if books.is_empty() {
        println!("No new books right now");
    }
    for book in &books {
        println!("{}\n", render::book_card(book));
    }

    Ok(())
}
