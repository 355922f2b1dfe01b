//! End-to-end prediction flow against a deterministic stand-in model.

use chrono::NaiveDate;
use hargapangan::application::forecast::ForecastService;
use hargapangan::application::ml::predictor::PricePredictor;
use hargapangan::domain::encoding::{CategoryEncoder, EncoderRegistry};
use hargapangan::domain::errors::PredictionError;
use hargapangan::domain::types::{CategoryField, Direction, FeatureRecord, MarketSelection};
use std::collections::HashMap;
use std::sync::Arc;

/// Returns a fixed price per day-of-month; fails on days it has no entry for.
struct TablePredictor {
    prices_by_day: HashMap<u32, f64>,
}

impl PricePredictor for TablePredictor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        self.prices_by_day
            .get(&record.day)
            .copied()
            .ok_or_else(|| PredictionError::ModelInference {
                reason: format!("no fixture price for day {}", record.day),
            })
    }

    fn name(&self) -> &str {
        "fixture table"
    }
}

fn registry() -> Arc<EncoderRegistry> {
    let field = |f, labels: &[&str]| {
        CategoryEncoder::from_labels(f, labels.iter().map(|s| s.to_string()).collect()).unwrap()
    };
    Arc::new(EncoderRegistry::new(
        field(CategoryField::Province, &["DKI JAKARTA", "JAWA BARAT"]),
        field(CategoryField::Regency, &["KOTA BANDUNG", "KOTA DEPOK"]),
        field(CategoryField::Market, &["PASAR X", "PASAR Y"]),
        field(
            CategoryField::Commodity,
            &["BERAS", "CABAI MERAH", "TELUR AYAM RAS"],
        ),
    ))
}

fn service(prices_by_day: &[(u32, f64)]) -> ForecastService {
    ForecastService::new(
        registry(),
        Arc::new(TablePredictor {
            prices_by_day: prices_by_day.iter().copied().collect(),
        }),
    )
}

fn bandung_rice() -> MarketSelection {
    MarketSelection {
        province: "JAWA BARAT".to_string(),
        regency: "KOTA BANDUNG".to_string(),
        market: "PASAR X".to_string(),
        commodity: "BERAS".to_string(),
    }
}

#[test]
fn rising_forecast_over_a_weekend_boundary() {
    let service = service(&[(10, 15000.00), (11, 15250.50)]);
    let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

    let forecast = service
        .predict_today_and_tomorrow(&bandung_rice(), date)
        .unwrap();

    assert_eq!(forecast.today.price, 15000.00);
    assert_eq!(forecast.tomorrow.price, 15250.50);
    assert_eq!(
        forecast.tomorrow.date,
        NaiveDate::from_ymd_opt(2024, 5, 11).unwrap()
    );
    assert_eq!(forecast.direction, Direction::Rising);
}

#[test]
fn equal_prices_classify_stable() {
    let service = service(&[(10, 15000.00), (11, 15000.00)]);
    let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

    let forecast = service
        .predict_today_and_tomorrow(&bandung_rice(), date)
        .unwrap();

    assert_eq!(forecast.direction, Direction::Stable);
}

#[test]
fn month_end_rolls_into_june() {
    let service = service(&[(31, 14800.0), (1, 14700.0)]);
    let date = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();

    let forecast = service
        .predict_today_and_tomorrow(&bandung_rice(), date)
        .unwrap();

    assert_eq!(
        forecast.tomorrow.date,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    );
    assert_eq!(forecast.direction, Direction::Falling);
}

#[test]
fn unknown_commodity_aborts_without_inference() {
    // The fixture has no prices at all: any model call would error with
    // ModelInference, so getting UnknownCategory proves the flow stopped
    // at encoding.
    let service = service(&[]);
    let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

    let mut selection = bandung_rice();
    selection.commodity = "TELUR AYAM RAS XX".to_string();

    let err = service
        .predict_today_and_tomorrow(&selection, date)
        .unwrap_err();

    match err {
        PredictionError::UnknownCategory { field, label } => {
            assert_eq!(field, CategoryField::Commodity);
            assert_eq!(label, "TELUR AYAM RAS XX");
        }
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
}

#[test]
fn selection_widgets_see_the_artifact_order() {
    let service = service(&[]);
    let labels = service.encoders().known_labels(CategoryField::Commodity);
    assert_eq!(
        labels,
        &[
            "BERAS".to_string(),
            "CABAI MERAH".to_string(),
            "TELUR AYAM RAS".to_string()
        ]
    );
}
