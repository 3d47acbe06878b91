//! Configuration loading
//!
//! All sources and services are configured from a single TOML file with
//! environment-variable overrides (prefix `MARKET_INTEL`, `__` separator).
//! Credentials live here and are never logged.

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub news: NewsConfig,
    pub trends: TrendsConfig,
    #[serde(default)]
    pub tweets: Option<TweetsConfig>,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

impl Config {
    /// Load configuration from a TOML file, applying environment overrides.
    pub fn load(path: &str) -> Result<Self> {
        let loaded = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("MARKET_INTEL").separator("__"))
            .build()?;

        Ok(loaded.try_deserialize()?)
    }
}

/// News source (NewsAPI-compatible `everything` endpoint)
#[derive(Debug, Clone, Deserialize)]
pub struct NewsConfig {
    #[serde(default = "default_news_url")]
    pub base_url: String,
    /// API key sent as the `apiKey` query parameter. Never logged.
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Industry trend source
#[derive(Debug, Clone, Deserialize)]
pub struct TrendsConfig {
    #[serde(default = "default_trends_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Social-post source. No provider ships with this crate; a `TweetSource`
/// implementation is plugged in programmatically and may read these fields.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetsConfig {
    #[serde(default)]
    pub bearer_token: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Report rendering output
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_dir")]
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_report_dir(),
        }
    }
}

/// Forecast model hyperparameters and split policy
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    #[serde(default = "default_n_trees")]
    pub n_trees: usize,
    #[serde(default)]
    pub max_depth: Option<u16>,
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    #[serde(default = "default_min_samples_leaf")]
    pub min_samples_leaf: usize,
    /// Fraction of rows held out for evaluation
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    /// Seed for the train/eval split and the forest; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            n_trees: default_n_trees(),
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            min_samples_leaf: default_min_samples_leaf(),
            test_fraction: default_test_fraction(),
            seed: None,
        }
    }
}

fn default_news_url() -> String {
    "https://newsapi.org/v2".to_string()
}

fn default_trends_url() -> String {
    "https://trends.example.com/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_n_trees() -> usize {
    100
}

fn default_min_samples_split() -> usize {
    2
}

fn default_min_samples_leaf() -> usize {
    1
}

fn default_test_fraction() -> f64 {
    0.2
}
