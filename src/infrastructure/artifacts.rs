//! Loading of the serialized model and encoder artifacts.
//!
//! Both artifacts are produced by the training pipeline and are read-only
//! here. The encoder artifact is a JSON object mapping each categorical
//! field to its ordered class-label list; the position of a label is the
//! code the model was trained on.

use crate::application::forecast::ForecastService;
use crate::application::ml::smartcore_predictor::SmartCorePredictor;
use crate::domain::encoding::{CategoryEncoder, EncoderRegistry};
use crate::domain::types::CategoryField;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// On-disk shape of the encoder artifact.
#[derive(Debug, Deserialize)]
struct EncoderSetFile {
    province: Vec<String>,
    regency: Vec<String>,
    market: Vec<String>,
    commodity: Vec<String>,
}

/// Loads the encoder registry artifact.
pub fn load_encoder_registry(path: &Path) -> Result<EncoderRegistry> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open encoder artifact at {path:?}"))?;
    let set: EncoderSetFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to deserialize encoder artifact at {path:?}"))?;

    let registry = EncoderRegistry::new(
        CategoryEncoder::from_labels(CategoryField::Province, set.province)?,
        CategoryEncoder::from_labels(CategoryField::Regency, set.regency)?,
        CategoryEncoder::from_labels(CategoryField::Market, set.market)?,
        CategoryEncoder::from_labels(CategoryField::Commodity, set.commodity)?,
    );

    info!("Loaded encoder registry from {:?}", path);
    Ok(registry)
}

/// Builds the immutable prediction context from the two artifacts.
pub fn load_forecast_service(model_path: &Path, encoders_path: &Path) -> Result<ForecastService> {
    let encoders = load_encoder_registry(encoders_path)?;
    let predictor = SmartCorePredictor::from_file(model_path)?;
    Ok(ForecastService::new(
        Arc::new(encoders),
        Arc::new(predictor),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_encoder_artifact_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "province": ["ACEH", "JAWA BARAT"],
                "regency": ["KOTA BANDUNG"],
                "market": ["PASAR X", "PASAR Y"],
                "commodity": ["BERAS", "TELUR AYAM RAS"]
            }}"#
        )
        .unwrap();

        let registry = load_encoder_registry(file.path()).unwrap();
        assert_eq!(
            registry.encode(CategoryField::Province, "JAWA BARAT").unwrap(),
            1
        );
        assert_eq!(
            registry.known_labels(CategoryField::Commodity),
            &["BERAS".to_string(), "TELUR AYAM RAS".to_string()]
        );
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        let err = load_encoder_registry(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("encoder artifact"));
    }

    #[test]
    fn test_duplicate_labels_fail_loading() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "province": ["ACEH", "ACEH"],
                "regency": ["KOTA BANDUNG"],
                "market": ["PASAR X"],
                "commodity": ["BERAS"]
            }}"#
        )
        .unwrap();

        assert!(load_encoder_registry(file.path()).is_err());
    }
}
