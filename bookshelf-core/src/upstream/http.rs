//! reqwest-backed OpenLibrary client

use super::{
    author_id, work_id, OpenLibrary, RawAuthorDoc, RawAuthorRecord, RawBookDoc, RawWork,
    SearchResponse, UpstreamResult,
};
use crate::config::ClientConfig;
use crate::error::UpstreamError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use urlencoding::encode;

/// OpenLibrary over HTTP
#[derive(Debug, Clone)]
pub struct HttpOpenLibrary {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOpenLibrary {
    /// Build a client from configuration
    pub fn new(config: &ClientConfig) -> UpstreamResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| UpstreamError::Unavailable {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the body; `Ok(None)` on 404
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> UpstreamResult<Option<T>> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Unavailable {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("{} answered 404", url);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(UpstreamError::Unavailable {
                url: url.to_string(),
                reason: format!("status {}", status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Unavailable {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| UpstreamError::Malformed {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Like `get_json`, but a 404 is an outage rather than an absent record
    async fn get_required<T: DeserializeOwned>(&self, url: &str) -> UpstreamResult<T> {
        self.get_json(url)
            .await?
            .ok_or_else(|| UpstreamError::Unavailable {
                url: url.to_string(),
                reason: format!("status {}", StatusCode::NOT_FOUND),
            })
    }
}

#[async_trait]
impl OpenLibrary for HttpOpenLibrary {
    async fn search_books(&self, query: &str) -> UpstreamResult<SearchResponse<RawBookDoc>> {
        let url = format!("{}/search.json?q={}", self.base_url, encode(query));
        self.get_required(&url).await
    }

    async fn search_authors(&self, query: &str) -> UpstreamResult<SearchResponse<RawAuthorDoc>> {
        let url = format!("{}/search/authors.json?q={}", self.base_url, encode(query));
        self.get_required(&url).await
    }

    async fn fetch_book_details(&self, slug: &str) -> UpstreamResult<Option<RawWork>> {
        let url = format!("{}/works/{}.json", self.base_url, encode(work_id(slug)));
        self.get_json(&url).await
    }

    async fn fetch_author_details(&self, slug: &str) -> UpstreamResult<Option<RawAuthorRecord>> {
        let url = format!("{}/authors/{}.json", self.base_url, encode(author_id(slug)));
        self.get_json(&url).await
    }

    async fn new_books(
        &self,
        query: &str,
        limit: usize,
    ) -> UpstreamResult<SearchResponse<RawBookDoc>> {
        let url = format!(
            "{}/search.json?q={}&sort=new&limit={}",
            self.base_url,
            encode(query),
            limit
        );
        self.get_required(&url).await
    }
}
