//! Market-signal ingestion
//!
//! Gathers raw signals from three independent external sources (news,
//! industry trends, social posts) and normalizes each into the shapes in
//! [`crate::types`], isolating callers from the raw transport payloads.

pub mod tweets;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::client::{NewsClient, TrendsClient};
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::report::{MarkdownRenderer, ReportRenderer};
use crate::types::{
    DateRange, KeywordNews, KeywordOutcome, NewsResult, TrendResult, TrendStatus, TweetResult,
};

pub use tweets::TweetSource;

/// Produces normalized market-signal data from external sources.
///
/// Holds no mutable state; every method is a plain request/response call.
pub struct IngestionService {
    news: NewsClient,
    trends: TrendsClient,
    tweet_source: Option<Arc<dyn TweetSource>>,
    reporter: Arc<dyn ReportRenderer>,
}

impl IngestionService {
    pub fn new(
        news: NewsClient,
        trends: TrendsClient,
        reporter: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            news,
            trends,
            tweet_source: None,
            reporter,
        }
    }

    /// Build the service from configuration with the bundled markdown
    /// renderer. Tweet providers are plugged in via [`Self::with_tweet_source`].
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.tweets.is_some() {
            warn!("tweet source configured but no provider is wired in; social posts will be empty");
        }

        Ok(Self::new(
            NewsClient::new(&config.news)?,
            TrendsClient::new(&config.trends)?,
            Arc::new(MarkdownRenderer::new(&config.report.output_dir)),
        ))
    }

    pub fn with_tweet_source(mut self, source: Arc<dyn TweetSource>) -> Self {
        self.tweet_source = Some(source);
        self
    }

    /// Fetch news for each keyword, one query per keyword.
    ///
    /// Every requested keyword appears in the result: fetched keywords carry
    /// their articles, keywords the source rejected carry a `Failed` marker.
    /// Transport or decode failures abort the whole call.
    pub async fn fetch_news(&self, keywords: &[String]) -> Result<NewsResult> {
        if keywords.is_empty() {
            return Err(EngineError::InvalidArgument(
                "at least one keyword is required".to_string(),
            ));
        }
        if let Some(bad) = keywords.iter().find(|k| k.trim().is_empty()) {
            return Err(EngineError::InvalidArgument(format!(
                "keyword '{}' is empty",
                bad
            )));
        }

        info!("Starting news fetch for {} keywords", keywords.len());

        let mut results = NewsResult::new();
        for keyword in keywords {
            let outcome = match self.news.everything(keyword).await {
                Ok(page) => KeywordOutcome::Fetched(KeywordNews {
                    articles: page.articles,
                    total_results: page.total_results,
                }),
                Err(EngineError::SourceStatus { status, .. }) => {
                    warn!("News source returned {} for '{}'", status, keyword);
                    KeywordOutcome::Failed {
                        reason: format!("status {}", status),
                    }
                }
                Err(e) => {
                    error!("Error fetching news for '{}': {}", keyword, e);
                    return Err(e);
                }
            };
            results.insert(keyword.clone(), outcome);
        }

        Ok(results)
    }

    /// Collect social posts within a date range.
    ///
    /// With no tweet source configured this always succeeds with an empty
    /// post list and no sentiment.
    pub async fn process_tweets(&self, start: NaiveDate, end: NaiveDate) -> Result<TweetResult> {
        let range = DateRange::new(start, end)?;

        match &self.tweet_source {
            Some(source) => {
                info!(
                    "Collecting social posts from {} ({} to {})",
                    source.name(),
                    range.start,
                    range.end
                );
                source.collect(&range).await.map_err(|e| {
                    error!("Error collecting social posts: {}", e);
                    e
                })
            }
            None => {
                info!("No tweet source configured, returning empty result");
                Ok(TweetResult::default())
            }
        }
    }

    /// Retrieve current trends for an industry.
    pub async fn get_industry_trends(&self, industry: &str) -> Result<TrendResult> {
        if industry.trim().is_empty() {
            return Err(EngineError::InvalidArgument(
                "industry must not be empty".to_string(),
            ));
        }

        info!("Fetching trends for {}", industry);

        match self.trends.explore(industry).await {
            Ok(payload) => Ok(TrendResult {
                industry: industry.to_string(),
                trend_data: payload,
                status: TrendStatus::Success,
            }),
            Err(EngineError::SourceStatus { status, .. }) => {
                error!("Trend source returned {} for '{}'", status, industry);
                Err(EngineError::TrendFetch(industry.to_string()))
            }
            Err(e) => {
                error!("Error fetching trends for '{}': {}", industry, e);
                Err(e)
            }
        }
    }

    /// Generate a market report focused on the given keywords.
    ///
    /// Rendering is delegated entirely to the configured collaborator; this
    /// method only validates input and returns the artifact locator.
    pub async fn generate_market_report(&self, keywords: &[String]) -> Result<PathBuf> {
        if keywords.is_empty() {
            return Err(EngineError::InvalidArgument(
                "at least one keyword is required".to_string(),
            ));
        }

        info!("Generating market report for {} keywords", keywords.len());

        self.reporter.render(keywords).await.map_err(|e| {
            error!("Error generating market report: {}", e);
            e
        })
    }
}
