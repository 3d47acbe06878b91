//! Pluggable social-post provider
//!
//! No provider ships with this crate. The ingestion service falls back to an
//! empty result with no sentiment when none is configured, which is the
//! documented default behavior rather than an error.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DateRange, TweetResult};

/// A source of social posts for a date range.
///
/// Implementations own authentication, pagination, and sentiment scoring;
/// the service only requires the normalized `TweetResult` shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Collect posts within the (inclusive) date range.
    async fn collect(&self, range: &DateRange) -> Result<TweetResult>;
}
