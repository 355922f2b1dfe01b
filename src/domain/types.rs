use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four categorical columns the price model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    Province,
    Regency,
    Market,
    Commodity,
}

impl CategoryField {
    pub const ALL: [CategoryField; 4] = [
        CategoryField::Province,
        CategoryField::Regency,
        CategoryField::Market,
        CategoryField::Commodity,
    ];

    /// Key used in the encoder artifact and in log output.
    pub fn key(&self) -> &'static str {
        match self {
            CategoryField::Province => "province",
            CategoryField::Regency => "regency",
            CategoryField::Market => "market",
            CategoryField::Commodity => "commodity",
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// User-selected labels identifying one price series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSelection {
    pub province: String,
    pub regency: String,
    pub market: String,
    pub commodity: String,
}

/// Encoded model input for a single (selection, date) pair.
///
/// Constructed fresh per prediction request and never mutated. The weekday
/// index follows the Monday=0 convention used by the training pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRecord {
    pub province_code: i64,
    pub regency_code: i64,
    pub market_code: i64,
    pub commodity_code: i64,
    pub day: u32,
    pub month: u32,
    pub weekday: u32,
}

/// Direction of the predicted price move between two consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Rising,
    Falling,
    Stable,
}

impl Direction {
    /// Classifies the move from today's to tomorrow's predicted price.
    ///
    /// Exact comparison, no tolerance band: equal floats are `Stable`.
    pub fn of(price_today: f64, price_tomorrow: f64) -> Self {
        if price_tomorrow > price_today {
            Direction::Rising
        } else if price_tomorrow < price_today {
            Direction::Falling
        } else {
            Direction::Stable
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rising => write!(f, "RISING"),
            Direction::Falling => write!(f, "FALLING"),
            Direction::Stable => write!(f, "STABLE"),
        }
    }
}

/// A predicted price for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPrice {
    pub date: NaiveDate,
    pub price: f64,
}

/// Result of the two-day prediction flow.
///
/// `tomorrow.date` is always exactly one calendar day after `today.date`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub today: DayPrice,
    pub tomorrow: DayPrice,
    pub direction: Direction,
}

/// Formats a price as Rupiah with thousands separators, e.g. `Rp 15,250.50`.
pub fn format_rupiah(price: f64) -> String {
    let negative = price < 0.0;
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-Rp {grouped}.{frac:02}")
    } else {
        format!("Rp {grouped}.{frac:02}")
    }
}
