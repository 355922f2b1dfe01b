use crate::domain::types::CategoryField;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the prediction flow (encoding, assembly, inference).
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Unknown {field} label: {label:?}")]
    UnknownCategory { field: CategoryField, label: String },

    #[error("Model inference failed: {reason}")]
    ModelInference { reason: String },

    #[error("Invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("No calendar day after {date}")]
    DateOverflow { date: NaiveDate },
}

/// Errors raised while parsing the wide price table.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing column {column:?} (found {found:?} at position {position})")]
    MissingColumn {
        column: String,
        found: String,
        position: usize,
    },

    #[error("Dataset has no date columns")]
    NoDateColumns,

    #[error("Unparsable date header {header:?}: {reason}")]
    BadDateHeader { header: String, reason: String },

    #[error("Unparsable price {value:?} in row {row}, column {column:?}")]
    BadPrice {
        value: String,
        row: usize,
        column: String,
    },
}

/// Errors raised while validating loaded model/encoder artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Duplicate {field} label {label:?} in encoder artifact")]
    DuplicateLabel { field: CategoryField, label: String },

    #[error("Empty label set for {field} in encoder artifact")]
    EmptyLabelSet { field: CategoryField },
}
