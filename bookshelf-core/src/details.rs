//! Book details, author details and the new-books feed

use crate::error::{BookshelfError, Result};
use crate::normalize::{normalize_author_record, normalize_book_doc, normalize_work};
use crate::types::{Author, Book, BookDetails};
use crate::upstream::OpenLibrary;
use futures::stream::{self, StreamExt, TryStreamExt};

/// Fetch a work and resolve each of its authors.
///
/// At most `concurrency` author lookups run at once; author order follows
/// the work's listing. An author upstream reports as missing becomes a
/// placeholder, while any other upstream failure fails the whole call.
pub async fn book_details(
    upstream: &dyn OpenLibrary,
    slug: &str,
    concurrency: usize,
) -> Result<BookDetails> {
    let work = upstream
        .fetch_book_details(slug)
        .await?
        .ok_or_else(|| BookshelfError::NotFound("Book details not found.".to_string()))?;

    let keys = work.author_keys();
    tracing::debug!("Resolving {} authors for {}", keys.len(), slug);

    let authors: Vec<Author> = stream::iter(keys)
        .map(|key| resolve_author(upstream, key))
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok(normalize_work(work, slug, authors))
}

async fn resolve_author(upstream: &dyn OpenLibrary, key: String) -> Result<Author> {
    match upstream.fetch_author_details(&key).await? {
        Some(record) => Ok(normalize_author_record(record, &key)),
        None => {
            tracing::warn!("Author {} not found upstream, using placeholder", key);
            Ok(Author::placeholder(key))
        }
    }
}

/// Fetch a single author record
pub async fn author_details(upstream: &dyn OpenLibrary, slug: &str) -> Result<Author> {
    upstream
        .fetch_author_details(slug)
        .await?
        .map(|record| normalize_author_record(record, slug))
        .ok_or_else(|| BookshelfError::NotFound("Author details not found.".to_string()))
}

/// Most recently published books matching `query`
pub async fn new_books(upstream: &dyn OpenLibrary, query: &str, limit: usize) -> Result<Vec<Book>> {
    let response = upstream.new_books(query, limit).await?;
    Ok(response
        .docs
        .into_iter()
        .filter_map(normalize_book_doc)
        .take(limit)
        .collect())
}
