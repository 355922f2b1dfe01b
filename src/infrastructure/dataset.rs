//! The wide price table backing the charts.
//!
//! One row per (province, regency, market, commodity), one column per
//! observation date with `%d/%m/%y` headers. This table never feeds the
//! prediction flow; the model only ever sees assembled feature records.

use crate::domain::errors::DatasetError;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Header names of the fixed leading columns, as exported upstream.
const LEADING_COLUMNS: [&str; 4] = ["Provinsi", "Kabupaten Kota", "Nama Pasar", "Nama Variant"];

const DATE_HEADER_FORMAT: &str = "%d/%m/%y";

/// How provincial prices are aggregated for the map and bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceAggregation {
    Lowest,
    Highest,
}

impl PriceAggregation {
    pub const ALL: [PriceAggregation; 2] = [PriceAggregation::Lowest, PriceAggregation::Highest];
}

impl fmt::Display for PriceAggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceAggregation::Lowest => write!(f, "Lowest price"),
            PriceAggregation::Highest => write!(f, "Highest price"),
        }
    }
}

#[derive(Debug, Clone)]
struct PriceRow {
    province: String,
    commodity: String,
    // One slot per date column; None where the observation is missing.
    prices: Vec<Option<f64>>,
}

/// Parsed wide table, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    rows: Vec<PriceRow>,
}

impl PriceTable {
    pub fn from_csv(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|e| {
            DatasetError::Csv(csv::Error::from(e))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr.headers()?.clone();
        for (position, expected) in LEADING_COLUMNS.iter().enumerate() {
            let found = headers.get(position).unwrap_or("");
            if found != *expected {
                return Err(DatasetError::MissingColumn {
                    column: (*expected).to_string(),
                    found: found.to_string(),
                    position,
                });
            }
        }

        let mut dates = Vec::new();
        for header in headers.iter().skip(LEADING_COLUMNS.len()) {
            let date = NaiveDate::parse_from_str(header, DATE_HEADER_FORMAT).map_err(|e| {
                DatasetError::BadDateHeader {
                    header: header.to_string(),
                    reason: e.to_string(),
                }
            })?;
            dates.push(date);
        }
        if dates.is_empty() {
            return Err(DatasetError::NoDateColumns);
        }

        let mut rows = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let mut prices = Vec::with_capacity(dates.len());
            for (j, cell) in record.iter().skip(LEADING_COLUMNS.len()).enumerate() {
                let cell = cell.trim();
                if cell.is_empty() {
                    prices.push(None);
                } else {
                    let price = cell.parse::<f64>().map_err(|_| DatasetError::BadPrice {
                        value: cell.to_string(),
                        row: i + 1,
                        column: headers
                            .get(LEADING_COLUMNS.len() + j)
                            .unwrap_or("")
                            .to_string(),
                    })?;
                    prices.push(Some(price));
                }
            }
            prices.resize(dates.len(), None);

            rows.push(PriceRow {
                // Upstream exports mix case and stray whitespace in province names.
                province: record.get(0).unwrap_or("").trim().to_uppercase(),
                commodity: record.get(3).unwrap_or("").trim().to_string(),
                prices,
            });
        }

        info!(
            "Loaded price table: {} rows, {} dates ({} .. {})",
            rows.len(),
            dates.len(),
            dates.first().map(|d| d.to_string()).unwrap_or_default(),
            dates.last().map(|d| d.to_string()).unwrap_or_default(),
        );

        Ok(Self { dates, rows })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The right-most date column: the latest observation day.
    pub fn latest_date(&self) -> NaiveDate {
        *self.dates.last().expect("PriceTable is never built without date columns")
    }

    /// Distinct commodity labels, in first-seen dataset order.
    pub fn commodities(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.commodity) {
                seen.push(row.commodity.clone());
            }
        }
        seen
    }

    /// Aggregated price per province for the latest date, sorted by province.
    ///
    /// Rows with no observation for the latest date drop out; a province
    /// drops out entirely when none of its rows has one.
    pub fn provincial_prices(
        &self,
        commodity: &str,
        aggregation: PriceAggregation,
    ) -> Vec<(String, f64)> {
        let last = self.dates.len() - 1;
        let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();

        for row in &self.rows {
            if row.commodity != commodity {
                continue;
            }
            let Some(price) = row.prices[last] else {
                continue;
            };
            grouped
                .entry(row.province.as_str())
                .and_modify(|current| {
                    *current = match aggregation {
                        PriceAggregation::Lowest => current.min(price),
                        PriceAggregation::Highest => current.max(price),
                    };
                })
                .or_insert(price);
        }

        grouped
            .into_iter()
            .map(|(province, price)| (province.to_string(), price))
            .collect()
    }

    /// Mean price across all rows of the commodity, per date, chronological.
    ///
    /// Dates where no row has an observation are skipped.
    pub fn national_average_series(&self, commodity: &str) -> Vec<(NaiveDate, f64)> {
        let mut series = Vec::with_capacity(self.dates.len());

        for (i, date) in self.dates.iter().enumerate() {
            let mut sum = 0.0;
            let mut count = 0usize;
            for row in &self.rows {
                if row.commodity != commodity {
                    continue;
                }
                if let Some(price) = row.prices[i] {
                    sum += price;
                    count += 1;
                }
            }
            if count > 0 {
                series.push((*date, sum / count as f64));
            }
        }

        series
    }
}
