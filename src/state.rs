use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::services::{UpstreamClient, UpstreamError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
    /// Number of degraded (mock) listings served since start-up
    fallbacks_served: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppStateError> {
        let upstream =
            UpstreamClient::new(&config).map_err(|e| AppStateError::HttpClient(e.to_string()))?;

        Ok(Self {
            config,
            upstream,
            fallbacks_served: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn record_fallback(&self, error: &UpstreamError) -> u64 {
        let total = self.fallbacks_served.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::warn!(
            upstream = %self.upstream.projects_url(),
            reason = error.kind(),
            error = %error,
            fallbacks_served = total,
            "Upstream catalog failed, serving mock listing"
        );
        total
    }

    pub fn fallbacks_served(&self) -> u64 {
        self.fallbacks_served.load(Ordering::Relaxed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}
