//! Search aggregation and pagination

use crate::error::{BookshelfError, Result};
use crate::normalize::{normalize_author_doc, normalize_book_doc};
use crate::types::SearchHit;
use crate::upstream::OpenLibrary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kind of record a search returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFilter {
    Books,
    Authors,
}

impl FromStr for SearchFilter {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "books" => Ok(SearchFilter::Books),
            "authors" => Ok(SearchFilter::Authors),
            _ => Err(BookshelfError::invalid(
                "filter",
                "must be either 'books' or 'authors'",
            )),
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchFilter::Books => write!(f, "books"),
            SearchFilter::Authors => write!(f, "authors"),
        }
    }
}

/// Offset/limit window over an aggregated result sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of items; `None` means "all remaining"
    pub limit: Option<usize>,

    /// Items to skip; `None` means 0
    pub offset: Option<usize>,
}

impl Page {
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self { limit, offset }
    }

    /// Half-open slice `[offset, offset + limit)`, clipped to the sequence.
    ///
    /// Windows past the end yield fewer (or zero) items rather than failing.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let limit = self.limit.unwrap_or(items.len());
        let offset = self.offset.unwrap_or(0);
        items.into_iter().skip(offset).take(limit).collect()
    }
}

/// Run a search against one upstream endpoint and paginate the normalized results.
///
/// Upstream order is preserved. Docs without a key are dropped before
/// pagination, so offsets count only returnable records.
pub async fn search(
    upstream: &dyn OpenLibrary,
    query: &str,
    filter: Option<SearchFilter>,
    page: Page,
) -> Result<Vec<SearchHit>> {
    let filter = filter.ok_or(BookshelfError::MissingFilter)?;

    let hits: Vec<SearchHit> = match filter {
        SearchFilter::Books => {
            let response = upstream.search_books(query).await?;
            let total = response.docs.len();
            let hits: Vec<SearchHit> = response
                .docs
                .into_iter()
                .filter_map(normalize_book_doc)
                .map(SearchHit::from)
                .collect();
            log_dropped(total, hits.len(), filter);
            hits
        }
        SearchFilter::Authors => {
            let response = upstream.search_authors(query).await?;
            let total = response.docs.len();
            let hits: Vec<SearchHit> = response
                .docs
                .into_iter()
                .filter_map(normalize_author_doc)
                .map(SearchHit::from)
                .collect();
            log_dropped(total, hits.len(), filter);
            hits
        }
    };

    tracing::debug!(
        "search {:?} ({}) matched {} records, page {:?}",
        query,
        filter,
        hits.len(),
        page
    );

    Ok(page.slice(hits))
}

fn log_dropped(total: usize, kept: usize, filter: SearchFilter) {
    if kept < total {
        tracing::warn!("Dropped {} {} docs without a key", total - kept, filter);
    }
}
