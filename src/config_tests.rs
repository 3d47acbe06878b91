//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;

    #[test]
    fn test_news_config_defaults() {
        let toml_str = r#"
api_key = "secret"
"#;
        let config: NewsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "https://newsapi.org/v2");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_news_config_overrides() {
        let toml_str = r#"
api_key = "secret"
base_url = "https://mirror.example.com/v2"
timeout_secs = 5
"#;
        let config: NewsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "https://mirror.example.com/v2");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_trends_config_defaults() {
        let config: TrendsConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "https://trends.example.com/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_report_config_default_dir() {
        let config = ReportConfig::default();
        assert_eq!(config.output_dir.to_str(), Some("reports"));
    }

    #[test]
    fn test_forecast_config_defaults() {
        let config: ForecastConfig = toml::from_str("").unwrap();
        assert_eq!(config.n_trees, 100);
        assert!(config.max_depth.is_none());
        assert_eq!(config.min_samples_split, 2);
        assert_eq!(config.min_samples_leaf, 1);
        assert_eq!(config.test_fraction, 0.2);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_forecast_config_overrides() {
        let toml_str = r#"
n_trees = 50
max_depth = 8
test_fraction = 0.3
seed = 42
"#;
        let config: ForecastConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.n_trees, 50);
        assert_eq!(config.max_depth, Some(8));
        assert_eq!(config.test_fraction, 0.3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_tweets_config_minimal() {
        let config: TweetsConfig = toml::from_str("").unwrap();
        assert!(config.bearer_token.is_none());
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_full_config() {
        let toml_str = r#"
[news]
api_key = "nk"

[trends]
base_url = "https://trends.internal/api"

[tweets]
bearer_token = "bt"

[report]
output_dir = "out/reports"

[forecast]
n_trees = 25
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.news.api_key, "nk");
        assert_eq!(config.trends.base_url, "https://trends.internal/api");
        assert_eq!(
            config.tweets.as_ref().and_then(|t| t.bearer_token.clone()),
            Some("bt".to_string())
        );
        assert_eq!(config.report.output_dir.to_str(), Some("out/reports"));
        assert_eq!(config.forecast.n_trees, 25);
    }

    #[test]
    fn test_config_without_optional_tables() {
        let toml_str = r#"
[news]
api_key = "nk"

[trends]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.tweets.is_none());
        assert_eq!(config.report.output_dir.to_str(), Some("reports"));
        assert_eq!(config.forecast.n_trees, 100);
    }
}
