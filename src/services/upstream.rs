use axum::body::Bytes;
use reqwest::Client;
use serde::de::IgnoredAny;

use crate::config::Config;

/// Ways the upstream catalog can fail a listing request.
///
/// The gateway treats all of them alike; the distinction only reaches logs.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream responded with {0}")]
    Status(reqwest::StatusCode),

    #[error("upstream body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Status(_) => "status",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

/// HTTP client for the upstream project catalog
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    projects_url: String,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            projects_url: config.upstream_projects_url(),
        })
    }

    pub fn projects_url(&self) -> &str {
        &self.projects_url
    }

    /// Fetch the listing, forwarding `raw_query` as-is.
    ///
    /// Returns the upstream body untouched once it has been checked to be JSON.
    pub async fn fetch_projects(&self, raw_query: Option<&str>) -> Result<Bytes, UpstreamError> {
        let url = match raw_query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}?{}", self.projects_url, query),
            None => self.projects_url.clone(),
        };

        tracing::debug!(url = %url, "Forwarding listing request upstream");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<IgnoredAny>(&body)?;

        Ok(body)
    }
}
