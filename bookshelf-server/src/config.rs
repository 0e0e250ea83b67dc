//! Server configuration from the environment

use bookshelf_core::config::{default_new_books_query, env_or, DEFAULT_NEW_BOOKS_LIMIT};
use bookshelf_core::ClientConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Everything the server reads from `BOOKSHELF_*` variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// OpenLibrary client settings
    pub client: ClientConfig,

    /// Search query backing `/newBooks`
    pub new_books_query: String,

    /// Number of books served by `/newBooks`
    pub new_books_limit: usize,

    /// Allowed CORS origins; `None` allows any
    pub cors_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
            client: ClientConfig::default(),
            new_books_query: default_new_books_query(),
            new_books_limit: DEFAULT_NEW_BOOKS_LIMIT,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration, falling back to defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host: IpAddr = env_or("BOOKSHELF_HOST", defaults.addr.ip());
        let port: u16 = env_or("PORT", defaults.addr.port());

        Self {
            addr: SocketAddr::new(host, port),
            client: ClientConfig::from_env(),
            new_books_query: std::env::var("BOOKSHELF_NEW_BOOKS_QUERY")
                .ok()
                .filter(|q| !q.trim().is_empty())
                .unwrap_or(defaults.new_books_query),
            new_books_limit: env_or("BOOKSHELF_NEW_BOOKS_LIMIT", defaults.new_books_limit),
            cors_origins: std::env::var("BOOKSHELF_CORS_ORIGINS")
                .ok()
                .and_then(|raw| parse_origins(&raw)),
        }
    }
}

/// Split a comma-separated origin list; `*` (or nothing) means any origin
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        None
    } else {
        Some(origins)
    }
}
