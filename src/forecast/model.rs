//! Random-forest regression wrapper
//!
//! The estimator itself is an opaque oracle from smartcore; this module owns
//! hyperparameters, fitting, schema validation, and model persistence.

use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::path::Path;

use crate::error::{EngineError, Result};

type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Forest hyperparameters, mirroring the estimator's configuration surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_trees: usize,
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

/// An immutable fitted model.
///
/// Produced only by a successful `train_model` call and passed explicitly
/// into `predict_future`; there is no shared model slot to synchronize.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainedModel {
    forest: Forest,
    params: ForestParams,
    feature_names: Vec<String>,
    target: String,
    fit_score: f64,
    residual_std: f64,
}

impl TrainedModel {
    pub(crate) fn fit(
        features: &Vec<Vec<f64>>,
        targets: &[f64],
        params: &ForestParams,
        seed: u64,
        feature_names: Vec<String>,
        target: String,
    ) -> Result<Self> {
        let x = DenseMatrix::from_2d_vec(features)
            .map_err(|e| EngineError::Training(e.to_string()))?;
        let y = targets.to_vec();

        let mut rf_params = RandomForestRegressorParameters::default()
            .with_n_trees(params.n_trees)
            .with_min_samples_split(params.min_samples_split)
            .with_min_samples_leaf(params.min_samples_leaf)
            .with_seed(seed);
        if let Some(depth) = params.max_depth {
            rf_params = rf_params.with_max_depth(depth);
        }

        let forest = RandomForestRegressor::fit(&x, &y, rf_params)
            .map_err(|e| EngineError::Training(e.to_string()))?;

        Ok(Self {
            forest,
            params: params.clone(),
            feature_names,
            target,
            fit_score: 0.0,
            residual_std: 0.0,
        })
    }

    pub(crate) fn with_evaluation(mut self, fit_score: f64, residual_std: f64) -> Self {
        self.fit_score = fit_score;
        self.residual_std = residual_std;
        self
    }

    /// Predict one value per feature row. Rows must match the training
    /// schema width.
    pub fn predict(&self, rows: &Vec<Vec<f64>>) -> Result<Vec<f64>> {
        if let Some(bad) = rows.iter().find(|r| r.len() != self.feature_names.len()) {
            return Err(EngineError::Prediction(format!(
                "row has {} features, model expects {}",
                bad.len(),
                self.feature_names.len()
            )));
        }

        let x = DenseMatrix::from_2d_vec(rows)
            .map_err(|e| EngineError::Prediction(e.to_string()))?;
        self.forest
            .predict(&x)
            .map_err(|e| EngineError::Prediction(e.to_string()))
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    /// R² against the held-out evaluation partition at train time
    pub fn fit_score(&self) -> f64 {
        self.fit_score
    }

    pub(crate) fn residual_std(&self) -> f64 {
        self.residual_std
    }

    /// Persist the model as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load a previously saved model. A missing file means no model was ever
    /// trained and saved, which is `ModelNotTrained` rather than an IO error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::ModelNotTrained);
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
