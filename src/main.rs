//! Market Intelligence Engine CLI
//!
//! Gathers market signals and trains/runs value forecasts.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use market_intel::{
    config::Config,
    forecast::{Dataset, ForecastService, TrainedModel},
    ingest::IngestionService,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "market-intel")]
#[command(about = "Market intelligence gathering and forecasting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch news for one or more keywords
    News {
        /// Keywords to search for
        keywords: Vec<String>,
    },
    /// Fetch current trends for an industry
    Trends {
        /// Industry to analyze
        industry: String,
    },
    /// Collect social posts within a date range
    Tweets {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },
    /// Generate a market report for the given keywords
    Report {
        /// Keywords to focus the report on
        keywords: Vec<String>,
    },
    /// Train a forecast model from a CSV dataset
    Train {
        /// CSV file with a header row and numeric columns
        #[arg(long)]
        data: PathBuf,
        /// Target column name
        #[arg(long)]
        target: String,
        /// Seed for the train/eval split (overrides config)
        #[arg(long)]
        seed: Option<u64>,
        /// Where to save the trained model
        #[arg(long, default_value = "model.json")]
        out: PathBuf,
    },
    /// Forecast future values with a previously trained model
    Forecast {
        /// CSV file with recent market data
        #[arg(long)]
        data: PathBuf,
        /// Number of periods to forecast
        #[arg(long)]
        periods: usize,
        /// Path to the trained model
        #[arg(long, default_value = "model.json")]
        model: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logging configuration is owned by the host process, once, before any
    // service is constructed.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::News { keywords } => fetch_news(config, keywords).await,
        Commands::Trends { industry } => fetch_trends(config, &industry).await,
        Commands::Tweets { start, end } => collect_tweets(config, start, end).await,
        Commands::Report { keywords } => generate_report(config, keywords).await,
        Commands::Train {
            data,
            target,
            seed,
            out,
        } => train(config, data, &target, seed, out),
        Commands::Forecast {
            data,
            periods,
            model,
        } => forecast(config, data, periods, model),
    }
}

async fn fetch_news(config: Config, keywords: Vec<String>) -> anyhow::Result<()> {
    let service = IngestionService::from_config(&config)?;
    let results = service.fetch_news(&keywords).await?;

    for (keyword, outcome) in &results {
        match outcome.news() {
            Some(news) => println!(
                "{:<24} {} articles ({} total)",
                keyword,
                news.articles.len(),
                news.total_results
            ),
            None => println!("{:<24} fetch failed", keyword),
        }
    }
    Ok(())
}

async fn fetch_trends(config: Config, industry: &str) -> anyhow::Result<()> {
    let service = IngestionService::from_config(&config)?;
    let result = service.get_industry_trends(industry).await?;

    println!("Industry: {}", result.industry);
    println!("{}", serde_json::to_string_pretty(&result.trend_data)?);
    Ok(())
}

async fn collect_tweets(config: Config, start: NaiveDate, end: NaiveDate) -> anyhow::Result<()> {
    let service = IngestionService::from_config(&config)?;
    let result = service.process_tweets(start, end).await?;

    println!("Posts collected: {}", result.tweets.len());
    match result.sentiment {
        Some(score) => println!("Sentiment: {:+.2}", score),
        None => println!("Sentiment: unavailable"),
    }
    Ok(())
}

async fn generate_report(config: Config, keywords: Vec<String>) -> anyhow::Result<()> {
    let service = IngestionService::from_config(&config)?;
    let path = service.generate_market_report(&keywords).await?;

    println!("Report written to {}", path.display());
    Ok(())
}

fn train(
    config: Config,
    data: PathBuf,
    target: &str,
    seed: Option<u64>,
    out: PathBuf,
) -> anyhow::Result<()> {
    let dataset = Dataset::from_csv(&data)?;

    let mut service = ForecastService::new(&config.forecast);
    if let Some(seed) = seed {
        service = service.with_seed(seed);
    }

    let report = service.train_model(&dataset, target)?;
    println!("Fit score (R²): {:.4}", report.fit_score);
    println!(
        "Forest: {} trees, max depth {:?}",
        report.params.n_trees, report.params.max_depth
    );

    report.model.save(&out)?;
    println!("Model saved to {}", out.display());
    Ok(())
}

fn forecast(config: Config, data: PathBuf, periods: usize, model: PathBuf) -> anyhow::Result<()> {
    let dataset = Dataset::from_csv(&data)?;
    let model = TrainedModel::load(&model)?;
    let service = ForecastService::new(&config.forecast);

    let points = service.predict_future(&model, &dataset, periods)?;

    println!("{:>6}  {:>14}  {:>30}", "period", "estimate", "95% interval");
    for point in &points {
        println!(
            "{:>6}  {:>14.4}  [{:>12.4}, {:>12.4}]",
            point.period, point.value, point.lower, point.upper
        );
    }
    Ok(())
}
