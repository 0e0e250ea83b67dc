//! Book details command implementation

use super::{print_json, render, with_spinner};
use anyhow::{Context, Result};
use bookshelf_core::OpenLibrary;

/// Show a work with its authors resolved
pub async fn book(
    upstream: &dyn OpenLibrary,
    key: &str,
    author_concurrency: usize,
    json: bool,
) -> Result<()> {
    let details = with_spinner(
        &format!("Fetching {}", key),
        bookshelf_core::book_details(upstream, key, author_concurrency),
    )
    .await
    .with_context(|| format!("Failed to fetch book {}", key))?;

    if json {
        print_json(&details)
    } else {
        println!("{}", render::details(&details));
        Ok(())
    }
}
