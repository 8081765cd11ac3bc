//! Search backend seam and the live arXiv client.

use crate::error::SearchError;
use async_trait::async_trait;
use log::debug;
use scholaris_config::SearchConfig;
use std::time::Duration;

/// Identifying header sent with every outbound search request.
const USER_AGENT: &str = concat!("scholaris/", env!("CARGO_PKG_VERSION"));

/// Paper-search backend interface.
///
/// The router depends on this seam rather than on a concrete client so
/// tests can substitute canned responses.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Issue a query and return the raw response text.
    async fn search(&self, query: &str, max_results: usize) -> Result<String, SearchError>;
}

/// Live client for the arXiv query API.
pub struct ArxivClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ArxivClient {
    /// Build a client from search config.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let endpoint = reqwest::Url::parse(&config.endpoint)
            .map_err(|err| SearchError::Transport(err.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| SearchError::Transport(err.to_string()))?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl SearchBackend for ArxivClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<String, SearchError> {
        debug!(
            "dispatching search (query_len={}, max_results={})",
            query.len(),
            max_results
        );
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("search_query", format!("all:{query}")),
                ("start", "0".to_string()),
                ("max_results", max_results.to_string()),
                ("sortBy", "relevance".to_string()),
                ("sortOrder", "descending".to_string()),
            ])
            .send()
            .await
            .map_err(SearchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Unavailable(status.as_u16()));
        }
        response.text().await.map_err(SearchError::from_reqwest)
    }
}
