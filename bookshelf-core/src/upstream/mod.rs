//! OpenLibrary access layer
//!
//! [`OpenLibrary`] is the seam between the aggregation logic and the network.
//! [`HttpOpenLibrary`] talks to the real API; [`MemoryOpenLibrary`] serves
//! canned fixtures for tests.

mod http;
mod memory;
pub mod schema;

pub use http::HttpOpenLibrary;
pub use memory::MemoryOpenLibrary;
pub use schema::{
    AuthorRef, RawAuthorDoc, RawAuthorRecord, RawBookDoc, RawWork, RawWorkAuthor,
    SearchResponse, TextValue,
};

use crate::error::UpstreamError;
use async_trait::async_trait;

/// Result type for upstream operations
pub type UpstreamResult<T> = std::result::Result<T, UpstreamError>;

/// Read access to the OpenLibrary endpoints the application needs.
///
/// Each method is a single attempt: no retries, no fallback endpoint.
/// Detail lookups return `Ok(None)` when upstream answers 404.
#[async_trait]
pub trait OpenLibrary: Send + Sync {
    /// `GET /search.json?q={query}`
    async fn search_books(&self, query: &str) -> UpstreamResult<SearchResponse<RawBookDoc>>;

    /// `GET /search/authors.json?q={query}`
    async fn search_authors(&self, query: &str) -> UpstreamResult<SearchResponse<RawAuthorDoc>>;

    /// `GET /works/{id}.json`
    async fn fetch_book_details(&self, slug: &str) -> UpstreamResult<Option<RawWork>>;

    /// `GET /authors/{id}.json`
    async fn fetch_author_details(&self, slug: &str) -> UpstreamResult<Option<RawAuthorRecord>>;

    /// `GET /search.json?q={query}&sort=new&limit={limit}`
    async fn new_books(
        &self,
        query: &str,
        limit: usize,
    ) -> UpstreamResult<SearchResponse<RawBookDoc>>;
}

/// Reduce a work slug (`/works/OL45804W`, `works/OL45804W` or `OL45804W`) to its id
pub fn work_id(slug: &str) -> &str {
    strip_collection(slug, "works")
}

/// Reduce an author slug (`/authors/OL23919A` or `OL23919A`) to its id
pub fn author_id(slug: &str) -> &str {
    strip_collection(slug, "authors")
}

fn strip_collection<'a>(slug: &'a str, collection: &str) -> &'a str {
    let trimmed = slug.trim().trim_start_matches('/');
    trimmed
        .strip_prefix(collection)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(trimmed)
        .trim_end_matches(".json")
}
