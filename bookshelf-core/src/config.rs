//! Upstream client configuration

use chrono::Datelike;
use std::str::FromStr;
use std::time::Duration;

/// Default OpenLibrary API root
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// Default per-request timeout for upstream calls
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of author lookups in flight per book-details request
pub const DEFAULT_AUTHOR_CONCURRENCY: usize = 4;

/// Default size of the new-books feed
pub const DEFAULT_NEW_BOOKS_LIMIT: usize = 10;

/// Settings for talking to OpenLibrary
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub base_url: String,

    /// Timeout applied to every upstream request
    pub timeout: Duration,

    /// Upper bound on concurrent author lookups (at least 1)
    pub author_concurrency: usize,

    /// User-Agent sent upstream
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            author_concurrency: DEFAULT_AUTHOR_CONCURRENCY,
            user_agent: format!("bookshelf/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Read overrides from `BOOKSHELF_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("BOOKSHELF_OPENLIBRARY_URL")
            .unwrap_or(defaults.base_url)
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            timeout: upstream_timeout(env_or(
                "BOOKSHELF_UPSTREAM_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
            author_concurrency: env_or(
                "BOOKSHELF_AUTHOR_CONCURRENCY",
                DEFAULT_AUTHOR_CONCURRENCY,
            )
            .max(1),
            user_agent: defaults.user_agent,
        }
    }

    /// Replace the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Per-request timeout of at least one second
fn upstream_timeout(secs: u64) -> Duration {
    Duration::from_secs(secs.max(1))
}

/// Parse an environment variable, falling back to `default` when unset or invalid
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid value {:?} for {}", raw, key);
                default
            }
        },
        Err(_) => default,
    }
}

/// Query used for the new-books feed: works first published this year
pub fn default_new_books_query() -> String {
    format!("first_publish_year:{}", chrono::Utc::now().year())
}
