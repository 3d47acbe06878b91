//! Market Intelligence Engine
//!
//! Gathers market signals from external sources and forecasts future values
//! from tabular market data.
//!
//! ## Architecture
//!
//! ```text
//! Clients (News/Trends/Tweets) → IngestionService → normalized signals
//!                                       ↓
//!                                ReportRenderer (artifact)
//!
//! Dataset (CSV) → ForecastService → TrainedModel → future estimates
//! ```
//!
//! The two services share nothing but the error taxonomy; each call is a
//! plain request/response with no retained mutable state.

pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod ingest;
pub mod report;
pub mod types;

#[cfg(test)]
mod config_tests;
