//! Core types for market-signal ingestion
//!
//! External payloads (articles, trend data, social posts) are opaque
//! `serde_json::Value`s — their shape is owned by the source, and this crate
//! does not validate their fields beyond presence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{EngineError, Result};

/// News fetched for a single keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordNews {
    pub articles: Vec<Value>,
    pub total_results: u64,
}

/// Per-keyword fetch outcome. A keyword that could not be fetched is present
/// with a `Failed` marker instead of being dropped from the map, so callers
/// can distinguish "no results" from "fetch failed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum KeywordOutcome {
    Fetched(KeywordNews),
    Failed { reason: String },
}

impl KeywordOutcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, KeywordOutcome::Fetched(_))
    }

    pub fn news(&self) -> Option<&KeywordNews> {
        match self {
            KeywordOutcome::Fetched(news) => Some(news),
            KeywordOutcome::Failed { .. } => None,
        }
    }
}

/// Result of a `fetch_news` call, keyed by the requested keywords
pub type NewsResult = HashMap<String, KeywordOutcome>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    Success,
    Failure,
}

/// Trend data for one industry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub industry: String,
    pub trend_data: Value,
    pub status: TrendStatus,
}

/// Social posts collected over a date range, with an optional aggregate
/// sentiment score in [-1, 1]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetResult {
    pub tweets: Vec<Value>,
    pub sentiment: Option<f64>,
}

/// Inclusive date range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EngineError::InvalidArgument(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }
}
