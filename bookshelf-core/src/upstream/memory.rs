//! In-memory OpenLibrary (for testing)

use super::{
    author_id, work_id, OpenLibrary, RawAuthorDoc, RawAuthorRecord, RawBookDoc, RawWork,
    SearchResponse, UpstreamResult,
};
use crate::error::UpstreamError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// How every call should fail, if at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outage {
    Unavailable,
    Malformed,
}

/// Fixture-backed OpenLibrary.
///
/// Fixtures are raw JSON, decoded on every call exactly like an HTTP body,
/// so tests exercise the same schema handling as production. Searches for
/// unknown queries return zero docs; unknown works and authors are 404s.
#[derive(Default)]
pub struct MemoryOpenLibrary {
    book_searches: HashMap<String, Value>,
    author_searches: HashMap<String, Value>,
    works: HashMap<String, Value>,
    authors: HashMap<String, Value>,
    new_books: Option<Value>,
    failing_authors: HashSet<String>,
    outage: Option<Outage>,
    latency: Option<Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MemoryOpenLibrary {
    /// Create an empty upstream
    pub fn new() -> Self {
        Self::default()
    }

    /// Docs returned by `search_books(query)`
    pub fn with_book_search(mut self, query: &str, docs: Value) -> Self {
        self.book_searches.insert(query.to_string(), envelope(docs));
        self
    }

    /// Docs returned by `search_authors(query)`
    pub fn with_author_search(mut self, query: &str, docs: Value) -> Self {
        self.author_searches.insert(query.to_string(), envelope(docs));
        self
    }

    /// Record served for `/works/{id}.json`
    pub fn with_work(mut self, slug: &str, record: Value) -> Self {
        self.works.insert(work_id(slug).to_string(), record);
        self
    }

    /// Record served for `/authors/{id}.json`
    pub fn with_author(mut self, slug: &str, record: Value) -> Self {
        self.authors.insert(author_id(slug).to_string(), record);
        self
    }

    /// Docs returned by `new_books`, whatever the query
    pub fn with_new_books(mut self, docs: Value) -> Self {
        self.new_books = Some(envelope(docs));
        self
    }

    /// Make lookups of this author fail as if the network dropped
    pub fn with_failing_author(mut self, slug: &str) -> Self {
        self.failing_authors.insert(author_id(slug).to_string());
        self
    }

    /// Delay every call, so concurrent calls overlap
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Fail every call with `UpstreamError::Unavailable`
    pub fn unavailable(mut self) -> Self {
        self.outage = Some(Outage::Unavailable);
        self
    }

    /// Fail every call with `UpstreamError::Malformed`
    pub fn malformed(mut self) -> Self {
        self.outage = Some(Outage::Malformed);
        self
    }

    /// Number of upstream calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of calls that were in progress at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn serve<T: DeserializeOwned>(
        &self,
        url: String,
        fixture: Option<&Value>,
    ) -> UpstreamResult<Option<T>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let result = self.decode(url, fixture);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn decode<T: DeserializeOwned>(
        &self,
        url: String,
        fixture: Option<&Value>,
    ) -> UpstreamResult<Option<T>> {
        match self.outage {
            Some(Outage::Unavailable) => {
                return Err(UpstreamError::Unavailable {
                    url,
                    reason: "connection refused".to_string(),
                })
            }
            Some(Outage::Malformed) => {
                return Err(UpstreamError::Malformed {
                    url,
                    reason: "expected value at line 1 column 1".to_string(),
                })
            }
            None => {}
        }

        fixture
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(|e| UpstreamError::Malformed {
                url,
                reason: e.to_string(),
            })
    }

    async fn serve_search<T: DeserializeOwned>(
        &self,
        url: String,
        fixture: Option<&Value>,
    ) -> UpstreamResult<SearchResponse<T>> {
        let empty = envelope(json!([]));
        Ok(self
            .serve(url, Some(fixture.unwrap_or(&empty)))
            .await?
            .unwrap_or_else(|| SearchResponse::new(Vec::new())))
    }
}

#[async_trait]
impl OpenLibrary for MemoryOpenLibrary {
    async fn search_books(&self, query: &str) -> UpstreamResult<SearchResponse<RawBookDoc>> {
        let url = format!("memory:///search.json?q={}", query);
        self.serve_search(url, self.book_searches.get(query)).await
    }

    async fn search_authors(&self, query: &str) -> UpstreamResult<SearchResponse<RawAuthorDoc>> {
        let url = format!("memory:///search/authors.json?q={}", query);
        self.serve_search(url, self.author_searches.get(query)).await
    }

    async fn fetch_book_details(&self, slug: &str) -> UpstreamResult<Option<RawWork>> {
        let id = work_id(slug);
        let url = format!("memory:///works/{}.json", id);
        self.serve(url, self.works.get(id)).await
    }

    async fn fetch_author_details(&self, slug: &str) -> UpstreamResult<Option<RawAuthorRecord>> {
        let id = author_id(slug);
        let url = format!("memory:///authors/{}.json", id);
        if self.failing_authors.contains(id) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            return Err(UpstreamError::Unavailable {
                url,
                reason: "connection reset".to_string(),
            });
        }
        self.serve(url, self.authors.get(id)).await
    }

    async fn new_books(
        &self,
        query: &str,
        limit: usize,
    ) -> UpstreamResult<SearchResponse<RawBookDoc>> {
        let url = format!("memory:///search.json?q={}&sort=new&limit={}", query, limit);
        let mut response: SearchResponse<RawBookDoc> =
            self.serve_search(url, self.new_books.as_ref()).await?;
        response.docs.truncate(limit);
        Ok(response)
    }
}

/// Wrap a docs array the way the search endpoints do
fn envelope(docs: Value) -> Value {
    let count = docs.as_array().map(Vec::len).unwrap_or(0);
    json!({ "numFound": count, "start": 0, "docs": docs })
}
