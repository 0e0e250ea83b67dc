//! Search endpoint

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use bookshelf_core::{BookshelfError, Page, SearchFilter, SearchHit};
use serde::Deserialize;

/// Raw query parameters for `/search`.
///
/// Everything arrives as text so validation can report which parameter
/// was wrong in our own error format.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search_param: Option<String>,
    pub filter: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Validated search request
#[derive(Debug, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub filter: Option<SearchFilter>,
    pub page: Page,
}

impl SearchParams {
    /// Check parameters in order: query, limit, offset, filter
    pub fn validate(self) -> Result<SearchRequest, BookshelfError> {
        let query = present(self.search_param)
            .ok_or_else(|| BookshelfError::MissingParameter("searchParam".to_string()))?;
        let limit = parse_count("limit", self.limit)?;
        let offset = parse_count("offset", self.offset)?;
        // Matched verbatim: only an empty value counts as absent
        let filter = self
            .filter
            .filter(|raw| !raw.is_empty())
            .map(|raw| raw.parse::<SearchFilter>())
            .transpose()?;

        Ok(SearchRequest {
            query,
            filter,
            page: Page::new(limit, offset),
        })
    }
}

/// Trimmed value, or `None` when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_count(name: &str, raw: Option<String>) -> Result<Option<usize>, BookshelfError> {
    present(raw)
        .map(|value| {
            value
                .parse::<usize>()
                .map_err(|_| BookshelfError::invalid(name, "must be a non-negative integer"))
        })
        .transpose()
}

/// Search books or authors
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let request = params.validate()?;
    let filter_label = request
        .filter
        .map(|filter| filter.to_string())
        .unwrap_or_default();

    let hits = bookshelf_core::search(
        state.upstream(),
        &request.query,
        request.filter,
        request.page,
    )
    .await?;

    if hits.is_empty() {
        return Err(BookshelfError::NotFound(format!(
            "No results found for the given search query and filter: '{}'",
            filter_label
        ))
        .into());
    }

    tracing::debug!("Returning {} results for {:?}", hits.len(), request.query);
    Ok(Json(hits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        search: Option<&str>,
        filter: Option<&str>,
        limit: Option<&str>,
        offset: Option<&str>,
    ) -> SearchParams {
        SearchParams {
            search_param: search.map(String::from),
            filter: filter.map(String::from),
            limit: limit.map(String::from),
            offset: offset.map(String::from),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = params(Some(" harry "), Some("books"), Some("2"), Some("0"))
            .validate()
            .unwrap();

        assert_eq!(request.query, "harry");
        assert_eq!(request.filter, Some(SearchFilter::Books));
        assert_eq!(request.page, Page::new(Some(2), Some(0)));
    }

    #[test]
    fn test_missing_search_param() {
        let err = params(None, Some("books"), None, None).validate().unwrap_err();
        assert!(matches!(err, BookshelfError::MissingParameter(ref name) if name == "searchParam"));

        let err = params(Some("   "), Some("books"), None, None).validate().unwrap_err();
        assert!(matches!(err, BookshelfError::MissingParameter(_)));
    }

    #[test]
    fn test_negative_and_garbage_counts() {
        for bad in ["-1", "ten", "1.5"] {
            let err = params(Some("q"), Some("books"), Some(bad), None)
                .validate()
                .unwrap_err();
            assert!(matches!(err, BookshelfError::InvalidParameter { ref name, .. } if name == "limit"));
        }

        let err = params(Some("q"), Some("books"), None, Some("-3"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, BookshelfError::InvalidParameter { ref name, .. } if name == "offset"));
    }

    #[test]
    fn test_blank_counts_are_absent() {
        let request = params(Some("q"), Some("authors"), Some(""), Some(" "))
            .validate()
            .unwrap();
        assert_eq!(request.page, Page::default());
    }

    #[test]
    fn test_filter_validation() {
        let err = params(Some("q"), Some("movies"), None, None)
            .validate()
            .unwrap_err();
        assert!(matches!(err, BookshelfError::InvalidParameter { ref name, .. } if name == "filter"));

        // Absent filter passes validation and is rejected by the aggregator
        let request = params(Some("q"), None, None, None).validate().unwrap();
        assert_eq!(request.filter, None);
        let request = params(Some("q"), Some(""), None, None).validate().unwrap();
        assert_eq!(request.filter, None);
    }

    #[test]
    fn test_filter_is_not_trimmed() {
        for raw in [" books ", "books ", "  "] {
            let err = params(Some("q"), Some(raw), None, None)
                .validate()
                .unwrap_err();
            assert!(
                matches!(err, BookshelfError::InvalidParameter { ref name, .. } if name == "filter"),
                "{:?} should be rejected",
                raw
            );
        }
    }
}
