//! Industry-trend source client

use reqwest::Client;
use tracing::debug;

use crate::config::TrendsConfig;
use crate::error::{EngineError, Result};

/// Client for the trend source
#[derive(Clone)]
pub struct TrendsClient {
    http: Client,
    base_url: String,
}

impl TrendsClient {
    pub fn new(config: &TrendsConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw trend payload for an industry.
    ///
    /// The payload shape is owned by the source; it is returned untouched.
    pub async fn explore(&self, industry: &str) -> Result<serde_json::Value> {
        let url = format!("{}/explore/{}", self.base_url, industry);
        debug!("Querying trend source for '{}'", industry);

        let resp = self.http.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(EngineError::SourceStatus {
                name: "trends",
                status: resp.status(),
            });
        }

        Ok(resp.json().await?)
    }
}
