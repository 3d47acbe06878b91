//! News API client
//!
//! Queries a NewsAPI-compatible `everything` endpoint, one keyword per call.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::NewsConfig;
use crate::error::{EngineError, Result};

/// One page of search results for a keyword
#[derive(Debug, Clone)]
pub struct NewsPage {
    pub articles: Vec<serde_json::Value>,
    pub total_results: u64,
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[allow(dead_code)]
    #[serde(default)]
    status: String,
    #[serde(rename = "totalResults")]
    total_results: u64,
    articles: Vec<serde_json::Value>,
}

/// Client for the news source
#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(config: &NewsConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Search articles matching a keyword.
    ///
    /// A non-success status maps to `EngineError::SourceStatus` so the caller
    /// can record a per-keyword failure; transport and decode errors propagate
    /// as `EngineError::Transport`.
    pub async fn everything(&self, keyword: &str) -> Result<NewsPage> {
        let url = format!("{}/everything", self.base_url);
        debug!("Querying news source for '{}'", keyword);

        let resp = self
            .http
            .get(&url)
            .query(&[("q", keyword), ("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(EngineError::SourceStatus {
                name: "news",
                status: resp.status(),
            });
        }

        let body: EverythingResponse = resp.json().await?;
        debug!(
            "News source returned {} articles ({} total) for '{}'",
            body.articles.len(),
            body.total_results,
            keyword
        );

        Ok(NewsPage {
            articles: body.articles,
            total_results: body.total_results,
        })
    }
}
