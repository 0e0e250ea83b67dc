//! Application state

use crate::config::ServerConfig;
use anyhow::Result;
use bookshelf_core::{HttpOpenLibrary, OpenLibrary};
use std::sync::Arc;

/// Shared application state.
///
/// Immutable after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// OpenLibrary access
    pub upstream: Arc<dyn OpenLibrary>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create state backed by the real OpenLibrary API
    pub fn new(config: ServerConfig) -> Result<Self> {
        let upstream = HttpOpenLibrary::new(&config.client)?;
        tracing::info!("Using OpenLibrary at {}", upstream.base_url());
        Ok(Self::with_upstream(Arc::new(upstream), config))
    }

    /// Create state around any upstream implementation
    pub fn with_upstream(upstream: Arc<dyn OpenLibrary>, config: ServerConfig) -> Self {
        Self {
            upstream,
            config: Arc::new(config),
        }
    }

    /// Upstream as a trait object reference
    pub fn upstream(&self) -> &dyn OpenLibrary {
        self.upstream.as_ref()
    }
}
