//! Author details command implementation

use super::{print_json, render, with_spinner};
use anyhow::{Context, Result};
use bookshelf_core::OpenLibrary;

/// Show a single author
pub async fn author(upstream: &dyn OpenLibrary, key: &str, json: bool) -> Result<()> {
    let author = with_spinner(
        &format!("Fetching {}", key),
        bookshelf_core::author_details(upstream, key),
    )
    .await
    .with_context(|| format!("Failed to fetch author {}", key))?;

    if json {
        print_json(&author)
    } else {
        println!("{}", render::author_card(&author));
        Ok(())
    }
}
