use crate::domain::errors::PredictionError;
use crate::domain::types::FeatureRecord;

/// Interface for regression models scoring one feature record.
pub trait PricePredictor: Send + Sync {
    /// Predicted price in Rupiah for the given record.
    ///
    /// Synchronous and deterministic; a shape rejection by the underlying
    /// model surfaces as `ModelInference`, never as a default price.
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
