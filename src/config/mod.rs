//! Configuration module for Harga Pangan.
//!
//! All settings come from environment variables (a `.env` file is loaded
//! first by `main`), with working defaults for a checkout that keeps its
//! data artifacts under `data/`.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Main application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Serialized random forest regressor (serde_json artifact).
    pub model_path: PathBuf,
    /// Encoder registry artifact (field -> ordered class labels).
    pub encoders_path: PathBuf,
    /// Wide price table CSV.
    pub dataset_path: PathBuf,
    /// Province outlines for the choropleth.
    pub geojson_path: PathBuf,

    /// Initial dashboard window size.
    pub window_width: f32,
    pub window_height: f32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            model_path: env_path("MODEL_PATH", "data/model_rf_harga.json"),
            encoders_path: env_path("ENCODERS_PATH", "data/label_encoders.json"),
            dataset_path: env_path("DATASET_PATH", "data/harga_komoditas.csv"),
            geojson_path: env_path("GEOJSON_PATH", "data/prov_37.geojson"),
            window_width: env_f32("WINDOW_WIDTH", 1280.0)?,
            window_height: env_f32("WINDOW_HEIGHT", 860.0)?,
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}

fn env_f32(key: &str, default: f32) -> Result<f32> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<f32>()
            .with_context(|| format!("Invalid {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
