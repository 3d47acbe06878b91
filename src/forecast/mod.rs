//! Regression training and forecasting
//!
//! Fits an ensemble regression estimator to historical tabular data and
//! projects future values. The service holds configuration only; fitted
//! state lives in the [`TrainedModel`] values it returns.

pub mod dataset;
pub mod model;


use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::config::ForecastConfig;
use crate::error::{EngineError, Result};

pub use dataset::Dataset;
pub use model::{ForestParams, TrainedModel};

/// Minimum rows needed for any train/eval split
const MIN_TRAIN_ROWS: usize = 2;

/// Rows of recent history considered when extending feature trends
const TREND_WINDOW: usize = 10;

/// Half-width multiplier for the forecast confidence interval (95%, normal
/// approximation over evaluation residuals)
const INTERVAL_Z: f64 = 1.96;

/// One forecasted period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// 1-based index of the future period
    pub period: usize,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Outcome of a successful training run
#[derive(Debug)]
pub struct TrainingReport {
    pub model: TrainedModel,
    /// R² on the held-out evaluation partition
    pub fit_score: f64,
    pub params: ForestParams,
}

/// Trains regression models and produces forecasts.
pub struct ForecastService {
    params: ForestParams,
    test_fraction: f64,
    seed: Option<u64>,
}

impl ForecastService {
    pub fn new(config: &ForecastConfig) -> Self {
        Self {
            params: ForestParams {
                n_trees: config.n_trees,
                max_depth: config.max_depth,
                min_samples_split: config.min_samples_split,
                min_samples_leaf: config.min_samples_leaf,
            },
            test_fraction: config.test_fraction,
            seed: config.seed,
        }
    }

    /// Pin the split and forest seed, making training deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Train a model on `data` with the named target column.
    ///
    /// Rows are split into training and evaluation partitions (randomized,
    /// reproducible when seeded); the fit score is R² on the evaluation
    /// partition. A failed fit returns an error and produces no model.
    pub fn train_model(&self, data: &Dataset, target: &str) -> Result<TrainingReport> {
        info!(
            "Training forecast model on {} rows, target '{}'",
            data.len(),
            target
        );

        let (feature_names, features, targets) = data.split_xy(target)?;

        if data.len() < MIN_TRAIN_ROWS {
            return Err(EngineError::InsufficientData {
                rows: data.len(),
                min: MIN_TRAIN_ROWS,
            });
        }

        let (train_idx, eval_idx) =
            dataset::split_indices(data.len(), self.test_fraction, self.seed);

        let train_x: Vec<Vec<f64>> = train_idx.iter().map(|&i| features[i].clone()).collect();
        let train_y: Vec<f64> = train_idx.iter().map(|&i| targets[i]).collect();
        let eval_x: Vec<Vec<f64>> = eval_idx.iter().map(|&i| features[i].clone()).collect();
        let eval_y: Vec<f64> = eval_idx.iter().map(|&i| targets[i]).collect();

        let forest_seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let model = TrainedModel::fit(
            &train_x,
            &train_y,
            &self.params,
            forest_seed,
            feature_names,
            target.to_string(),
        )
        .map_err(|e| {
            tracing::error!("Error training model: {}", e);
            e
        })?;

        let eval_pred = model.predict(&eval_x)?;
        let fit_score = r_squared(&eval_y, &eval_pred);
        let residual_std = residual_std(&eval_y, &eval_pred);
        let model = model.with_evaluation(fit_score, residual_std);

        info!(
            "Model fit complete: score {:.4} on {} evaluation rows",
            fit_score,
            eval_y.len()
        );

        Ok(TrainingReport {
            fit_score,
            params: model.params().clone(),
            model,
        })
    }

    /// Project `periods` future values from the trained model and recent data.
    ///
    /// Future feature rows are extrapolated by extending each feature's mean
    /// per-row delta over the most recent [`TREND_WINDOW`] rows; a single
    /// observed row degenerates to carry-forward. Each point carries a 95%
    /// interval derived from the model's evaluation residuals.
    pub fn predict_future(
        &self,
        model: &TrainedModel,
        data: &Dataset,
        periods: usize,
    ) -> Result<Vec<ForecastPoint>> {
        if periods == 0 {
            return Err(EngineError::InvalidArgument(
                "periods must be greater than zero".to_string(),
            ));
        }

        let recent = data.feature_rows(model.feature_names())?;
        if recent.is_empty() {
            return Err(EngineError::InsufficientData { rows: 0, min: 1 });
        }

        info!(
            "Forecasting {} periods from {} recent rows",
            periods,
            recent.len()
        );

        let future = extrapolate_features(&recent, periods);
        let values = model.predict(&future).map_err(|e| {
            tracing::error!("Error generating forecast: {}", e);
            e
        })?;

        let half_width = INTERVAL_Z * model.residual_std();
        Ok(values
            .into_iter()
            .enumerate()
            .map(|(i, value)| ForecastPoint {
                period: i + 1,
                value,
                lower: value - half_width,
                upper: value + half_width,
            })
            .collect())
    }
}

/// Extend each feature linearly by its mean per-row delta over the tail
/// window of recent rows.
fn extrapolate_features(recent: &[Vec<f64>], periods: usize) -> Vec<Vec<f64>> {
    let last = recent[recent.len() - 1].clone();
    let window = &recent[recent.len().saturating_sub(TREND_WINDOW)..];

    let steps: Vec<f64> = if window.len() < 2 {
        vec![0.0; last.len()]
    } else {
        let first = &window[0];
        let span = (window.len() - 1) as f64;
        last.iter()
            .zip(first.iter())
            .map(|(l, f)| (l - f) / span)
            .collect()
    };

    (1..=periods)
        .map(|p| {
            last.iter()
                .zip(&steps)
                .map(|(v, s)| v + s * p as f64)
                .collect()
        })
        .collect()
}

/// Coefficient of determination; 0.0 when the targets have no variance.
fn r_squared(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let n = y_true.len();
    if n == 0 || n != y_pred.len() {
        return 0.0;
    }

    let mean: f64 = y_true.iter().sum::<f64>() / n as f64;
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    }
}

/// Root-mean-square residual on the evaluation partition
fn residual_std(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let n = y_true.len();
    if n == 0 || n != y_pred.len() {
        return 0.0;
    }

    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    (ss_res / n as f64).sqrt()
}
