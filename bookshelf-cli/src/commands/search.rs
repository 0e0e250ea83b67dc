//! Search command implementation

use super::{print_json, render, with_spinner};
use anyhow::{Context, Result};
use bookshelf_core::{OpenLibrary, Page, SearchFilter};

/// Search books or authors and print one card per result
pub async fn search(
    upstream: &dyn OpenLibrary,
    query: &str,
    filter: SearchFilter,
    limit: Option<usize>,
    offset: Option<usize>,
    json: bool,
) -> Result<()> {
    let page = Page::new(limit, offset);
    let hits = with_spinner(
        &format!("Searching {} for {:?}", filter, query),
        bookshelf_core::search(upstream, query, Some(filter), page),
    )
    .await
    .with_context(|| format!("Search for {:?} failed", query))?;

    if json {
        return print_json(&hits);
    }

    if hits.is_empty() {
        println!("No {} found for {:?}", filter, query);
        return Ok(());
    }

    let first = offset.unwrap_or(0) + 1;
    for (i, hit) in hits.iter().enumerate() {
        println!("{:>3}. {}", first + i, render::hit(hit));
    }

    Ok(())
}
