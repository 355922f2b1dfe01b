use crate::domain::encoding::EncoderRegistry;
use crate::domain::errors::PredictionError;
use crate::domain::types::{CategoryField, FeatureRecord, MarketSelection};
use chrono::{Datelike, NaiveDate};

/// Ordered list of model input columns.
/// This order MUST match exactly the order used when the model was trained.
/// Any change here is a breaking change for saved models.
pub const FEATURE_COLUMNS: &[&str] = &[
    "province",
    "regency",
    "market",
    "commodity",
    "day",
    "month",
    "weekday",
];

/// Builds the model input for one (selection, date) pair.
///
/// Encodes the four categorical labels and derives the date features.
/// Weekday is days-from-Monday (Monday = 0), the same convention the
/// training pipeline used. Pure and deterministic.
pub fn assemble(
    encoders: &EncoderRegistry,
    selection: &MarketSelection,
    date: NaiveDate,
) -> Result<FeatureRecord, PredictionError> {
    Ok(FeatureRecord {
        province_code: encoders.encode(CategoryField::Province, &selection.province)?,
        regency_code: encoders.encode(CategoryField::Regency, &selection.regency)?,
        market_code: encoders.encode(CategoryField::Market, &selection.market)?,
        commodity_code: encoders.encode(CategoryField::Commodity, &selection.commodity)?,
        day: date.day(),
        month: date.month(),
        weekday: date.weekday().num_days_from_monday(),
    })
}

/// Flattens a record into the f64 row the regressor scores.
/// Column order follows [`FEATURE_COLUMNS`].
pub fn record_to_vector(record: &FeatureRecord) -> Vec<f64> {
    vec![
        record.province_code as f64,
        record.regency_code as f64,
        record.market_code as f64,
        record.commodity_code as f64,
        f64::from(record.day),
        f64::from(record.month),
        f64::from(record.weekday),
    ]
}
