use super::predictor::PricePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::features::record_to_vector;
use crate::domain::types::FeatureRecord;
use anyhow::Context;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Random forest price model deserialized from the training artifact.
///
/// The artifact is the serde_json serialization the training side writes.
/// Loading is all-or-nothing: a missing or corrupt artifact fails startup
/// instead of degrading into a predictor that answers with a placeholder.
#[derive(Debug)]
pub struct SmartCorePredictor {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartCorePredictor {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open model artifact at {path:?}"))?;
        let model = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize model artifact at {path:?}"))?;

        info!("Loaded price model from {:?}", path);
        Ok(Self { model })
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let input_vec = record_to_vector(record);
        let input_matrix = DenseMatrix::from_2d_vec(&vec![input_vec]).map_err(|e| {
            PredictionError::ModelInference {
                reason: format!("Matrix creation failed: {e}"),
            }
        })?;

        let predictions =
            self.model
                .predict(&input_matrix)
                .map_err(|e| PredictionError::ModelInference {
                    reason: format!("Prediction failed: {e}"),
                })?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::ModelInference {
                reason: "No prediction returned".to_string(),
            })
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}
