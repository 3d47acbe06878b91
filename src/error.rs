//! Error types for the engine
//!
//! Every operation logs at error level before propagating one of these;
//! there is no silent recovery and no automatic retry.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Network-level failure or undecodable response body
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An external source answered with a non-success HTTP status
    #[error("{name} source responded with status {status}")]
    SourceStatus {
        name: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("failed to fetch industry trends for '{0}'")]
    TrendFetch(String),

    #[error("not enough rows to train: have {rows}, need at least {min}")]
    InsufficientData { rows: usize, min: usize },

    #[error("no trained model available")]
    ModelNotTrained,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("model training failed: {0}")]
    Training(String),

    #[error("prediction failed: {0}")]
    Prediction(String),

    #[error("report rendering failed: {0}")]
    Report(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl EngineError {
    /// True when retrying the same call with the same inputs cannot succeed.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidArgument(_)
                | EngineError::InsufficientData { .. }
                | EngineError::ModelNotTrained
        )
    }
}
