//! Tabular dataset for model training
//!
//! Named f64 columns with equal row counts. One column is designated as the
//! target at train time; the rest are features.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Load a dataset from a CSV file with a header row; every cell must
    /// parse as f64.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let mut dataset = Dataset::new(columns);

        for record in reader.records() {
            let record = record?;
            let row = record
                .iter()
                .map(|cell| {
                    cell.trim().parse::<f64>().map_err(|_| {
                        EngineError::InvalidArgument(format!("non-numeric cell '{}'", cell))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            dataset.push_row(row)?;
        }

        Ok(dataset)
    }

    pub fn push_row(&mut self, row: Vec<f64>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(EngineError::InvalidArgument(format!(
                "row has {} values, expected {}",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Split into feature names, feature rows, and target values.
    pub(crate) fn split_xy(&self, target: &str) -> Result<(Vec<String>, Vec<Vec<f64>>, Vec<f64>)> {
        let target_idx = self.column_index(target).ok_or_else(|| {
            EngineError::InvalidArgument(format!("target column '{}' not found", target))
        })?;

        let feature_names: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != target_idx)
            .map(|(_, name)| name.clone())
            .collect();

        if feature_names.is_empty() {
            return Err(EngineError::InvalidArgument(
                "dataset needs at least one feature column besides the target".to_string(),
            ));
        }

        let mut features = Vec::with_capacity(self.rows.len());
        let mut targets = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut feature_row = Vec::with_capacity(row.len() - 1);
            for (i, value) in row.iter().enumerate() {
                if i != target_idx {
                    feature_row.push(*value);
                }
            }
            features.push(feature_row);
            targets.push(row[target_idx]);
        }

        Ok((feature_names, features, targets))
    }

    /// Select the model's feature columns, in the model's order.
    pub(crate) fn feature_rows(&self, feature_names: &[String]) -> Result<Vec<Vec<f64>>> {
        let indices: Vec<usize> = feature_names
            .iter()
            .map(|name| {
                self.column_index(name).ok_or_else(|| {
                    EngineError::Prediction(format!(
                        "dataset is missing model feature column '{}'",
                        name
                    ))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i]).collect())
            .collect())
    }
}

/// Randomized train/eval index split. Both partitions are always non-empty
/// for `n >= 2`; the same seed produces the same split.
pub(crate) fn split_indices(
    n: usize,
    test_fraction: f64,
    seed: Option<u64>,
) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    match seed {
        Some(s) => indices.shuffle(&mut StdRng::seed_from_u64(s)),
        None => indices.shuffle(&mut rand::rng()),
    }

    let test_len = ((n as f64) * test_fraction).round() as usize;
    let test_len = test_len.clamp(1, n.saturating_sub(1).max(1));

    let eval = indices.split_off(n - test_len);
    (indices, eval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_dataset() -> Dataset {
        let mut data = Dataset::new(vec!["x".to_string(), "y".to_string()]);
        for i in 0..10 {
            data.push_row(vec![i as f64, (i * 2) as f64]).unwrap();
        }
        data
    }

    #[test]
    fn test_push_row_rejects_ragged_row() {
        let mut data = Dataset::new(vec!["a".to_string(), "b".to_string()]);
        let err = data.push_row(vec![1.0]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_split_xy_unknown_target() {
        let data = sample_dataset();
        let err = data.split_xy("volume").unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_split_xy_separates_target() {
        let data = sample_dataset();
        let (names, features, targets) = data.split_xy("y").unwrap();

        assert_eq!(names, vec!["x".to_string()]);
        assert_eq!(features.len(), 10);
        assert_eq!(features[3], vec![3.0]);
        assert_eq!(targets[3], 6.0);
    }

    #[test]
    fn test_split_xy_rejects_target_only_dataset() {
        let mut data = Dataset::new(vec!["y".to_string()]);
        data.push_row(vec![1.0]).unwrap();
        data.push_row(vec![2.0]).unwrap();

        let err = data.split_xy("y").unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_feature_rows_reorders_columns() {
        let mut data = Dataset::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        data.push_row(vec![1.0, 2.0, 3.0]).unwrap();

        let rows = data
            .feature_rows(&["c".to_string(), "a".to_string()])
            .unwrap();
        assert_eq!(rows, vec![vec![3.0, 1.0]]);
    }

    #[test]
    fn test_feature_rows_missing_column() {
        let data = sample_dataset();
        let err = data.feature_rows(&["z".to_string()]).unwrap_err();
        assert!(matches!(err, EngineError::Prediction(_)));
    }

    #[test]
    fn test_from_csv_parses_headers_and_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "open,close").unwrap();
        writeln!(file, "1.5,2.5").unwrap();
        writeln!(file, "3.0,4.0").unwrap();

        let data = Dataset::from_csv(file.path()).unwrap();
        assert_eq!(data.columns(), &["open".to_string(), "close".to_string()]);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_from_csv_rejects_non_numeric_cell() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "open,close").unwrap();
        writeln!(file, "1.5,n/a").unwrap();

        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_split_indices_partitions_all_rows() {
        let (train, eval) = split_indices(10, 0.2, Some(7));
        assert_eq!(train.len(), 8);
        assert_eq!(eval.len(), 2);

        let mut all: Vec<usize> = train.iter().chain(eval.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<usize>>());
    }

    #[test]
    fn test_split_indices_same_seed_same_split() {
        let a = split_indices(50, 0.2, Some(42));
        let b = split_indices(50, 0.2, Some(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_indices_two_rows() {
        let (train, eval) = split_indices(2, 0.2, Some(1));
        assert_eq!(train.len(), 1);
        assert_eq!(eval.len(), 1);
    }
}
