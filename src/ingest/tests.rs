//! Unit tests for the ingestion service

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;

use super::tweets::MockTweetSource;
use super::IngestionService;
use crate::client::{NewsClient, TrendsClient};
use crate::config::{NewsConfig, TrendsConfig};
use crate::error::EngineError;
use crate::report::MockReportRenderer;
use crate::types::TweetResult;

fn test_service() -> IngestionService {
    test_service_with_renderer(MockReportRenderer::new())
}

fn test_service_with_renderer(renderer: MockReportRenderer) -> IngestionService {
    let news = NewsClient::new(&NewsConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        timeout_secs: 1,
    })
    .unwrap();
    let trends = TrendsClient::new(&TrendsConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
    })
    .unwrap();

    IngestionService::new(news, trends, Arc::new(renderer))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_fetch_news_rejects_empty_keyword_set() {
    let service = test_service();
    let err = service.fetch_news(&[]).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_fetch_news_rejects_blank_keyword() {
    let service = test_service();
    let keywords = vec!["energy".to_string(), "  ".to_string()];
    let err = service.fetch_news(&keywords).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_process_tweets_default_is_empty() {
    let service = test_service();
    let result = service
        .process_tweets(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();

    assert!(result.tweets.is_empty());
    assert!(result.sentiment.is_none());
}

#[tokio::test]
async fn test_process_tweets_same_day_range_is_valid() {
    let service = test_service();
    let result = service
        .process_tweets(date(2024, 6, 15), date(2024, 6, 15))
        .await
        .unwrap();

    assert_eq!(result, TweetResult::default());
}

#[tokio::test]
async fn test_process_tweets_rejects_inverted_range() {
    let service = test_service();
    let err = service
        .process_tweets(date(2024, 2, 1), date(2024, 1, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_process_tweets_delegates_to_configured_source() {
    let mut source = MockTweetSource::new();
    source.expect_name().return_const("mock".to_string());
    source.expect_collect().returning(|_| {
        Ok(TweetResult {
            tweets: vec![serde_json::json!({"text": "markets up"})],
            sentiment: Some(0.42),
        })
    });

    let service = test_service().with_tweet_source(Arc::new(source));
    let result = service
        .process_tweets(date(2024, 1, 1), date(2024, 1, 2))
        .await
        .unwrap();

    assert_eq!(result.tweets.len(), 1);
    assert_eq!(result.sentiment, Some(0.42));
}

#[tokio::test]
async fn test_get_industry_trends_rejects_empty_industry() {
    let service = test_service();
    let err = service.get_industry_trends("").await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_generate_market_report_rejects_empty_keywords() {
    let service = test_service();
    let err = service.generate_market_report(&[]).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_generate_market_report_returns_renderer_artifact() {
    let mut renderer = MockReportRenderer::new();
    renderer
        .expect_render()
        .returning(|_| Ok(PathBuf::from("reports/market-report-test.md")));

    let service = test_service_with_renderer(renderer);
    let path = service
        .generate_market_report(&["tech".to_string()])
        .await
        .unwrap();

    assert_eq!(path, PathBuf::from("reports/market-report-test.md"));
}

#[tokio::test]
async fn test_generate_market_report_propagates_renderer_failure() {
    let mut renderer = MockReportRenderer::new();
    renderer
        .expect_render()
        .returning(|_| Err(EngineError::Report("disk full".to_string())));

    let service = test_service_with_renderer(renderer);
    let err = service
        .generate_market_report(&["tech".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Report(_)));
}
