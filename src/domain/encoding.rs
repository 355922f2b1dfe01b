//! Categorical label encoding.
//!
//! Each categorical model input has one encoder: an ordered bijection between
//! the label strings seen at training time and the integer codes `0..N` the
//! model consumes. Encoders are loaded once from the artifact at startup and
//! never mutated afterwards.

use crate::domain::errors::{ArtifactError, PredictionError};
use crate::domain::types::CategoryField;
use std::collections::HashMap;

/// Label -> code mapping for one categorical column.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    field: CategoryField,
    labels: Vec<String>,
    codes: HashMap<String, i64>,
}

impl CategoryEncoder {
    /// Builds an encoder from the artifact's ordered class list.
    ///
    /// Codes are the positions in `labels`, matching how the training side
    /// assigned them. Rejects duplicate labels: a duplicate would make the
    /// mapping ambiguous and silently corrupt every prediction.
    pub fn from_labels(
        field: CategoryField,
        labels: Vec<String>,
    ) -> Result<Self, ArtifactError> {
        if labels.is_empty() {
            return Err(ArtifactError::EmptyLabelSet { field });
        }

        let mut codes = HashMap::with_capacity(labels.len());
        for (code, label) in labels.iter().enumerate() {
            if codes.insert(label.clone(), code as i64).is_some() {
                return Err(ArtifactError::DuplicateLabel {
                    field,
                    label: label.clone(),
                });
            }
        }

        Ok(Self {
            field,
            labels,
            codes,
        })
    }

    /// The trained integer code for `label`.
    pub fn encode(&self, label: &str) -> Result<i64, PredictionError> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| PredictionError::UnknownCategory {
                field: self.field,
                label: label.to_string(),
            })
    }

    /// Known labels in code order. Drives the selection UI.
    pub fn known_labels(&self) -> &[String] {
        &self.labels
    }
}

/// One encoder per categorical model input.
#[derive(Debug, Clone)]
pub struct EncoderRegistry {
    province: CategoryEncoder,
    regency: CategoryEncoder,
    market: CategoryEncoder,
    commodity: CategoryEncoder,
}

impl EncoderRegistry {
    pub fn new(
        province: CategoryEncoder,
        regency: CategoryEncoder,
        market: CategoryEncoder,
        commodity: CategoryEncoder,
    ) -> Self {
        Self {
            province,
            regency,
            market,
            commodity,
        }
    }

    fn encoder(&self, field: CategoryField) -> &CategoryEncoder {
        match field {
            CategoryField::Province => &self.province,
            CategoryField::Regency => &self.regency,
            CategoryField::Market => &self.market,
            CategoryField::Commodity => &self.commodity,
        }
    }

    pub fn encode(&self, field: CategoryField, label: &str) -> Result<i64, PredictionError> {
        self.encoder(field).encode(label)
    }

    pub fn known_labels(&self, field: CategoryField) -> &[String] {
        self.encoder(field).known_labels()
    }
}
