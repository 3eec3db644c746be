use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::controller::FilterState;
use crate::models::{CategoriesResponse, Project};

/// Why a listing or category fetch failed
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never completed (host unreachable, connection reset, timeout)
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

/// Data source behind the project list controller
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    /// Listing filtered server-side according to `filter`
    async fn list_projects(&self, filter: &FilterState) -> Result<Vec<Project>, FetchError>;

    /// Category tags known to the catalog
    async fn categories(&self) -> Result<Vec<String>, FetchError>;
}

/// `ProjectsApi` over HTTP: listings through the gateway, categories straight
/// from the catalog.
#[derive(Debug, Clone)]
pub struct HttpProjectsApi {
    client: Client,
    projects_url: Url,
    categories_url: Url,
}

impl HttpProjectsApi {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            projects_url: parse_url(&config.gateway_projects_url())?,
            categories_url: parse_url(&config.categories_url())?,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ProjectsApi for HttpProjectsApi {
    async fn list_projects(&self, filter: &FilterState) -> Result<Vec<Project>, FetchError> {
        let mut url = self.projects_url.clone();
        let params = filter.query_params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn categories(&self) -> Result<Vec<String>, FetchError> {
        let response = self.client.get(self.categories_url.clone()).send().await?;
        let body: CategoriesResponse = Self::decode(response).await?;
        Ok(body.categories)
    }
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))
}
