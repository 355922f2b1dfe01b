//! Wide price-table parsing and aggregation.

use chrono::NaiveDate;
use hargapangan::domain::errors::DatasetError;
use hargapangan::infrastructure::dataset::{PriceAggregation, PriceTable};

const SAMPLE: &str = "\
Provinsi,Kabupaten Kota,Nama Pasar,Nama Variant,01/03/24,02/03/24,03/03/24
Jawa Barat,KOTA BANDUNG,PASAR X,BERAS,14000,14100,14200
JAWA BARAT ,KOTA BOGOR,PASAR Y,BERAS,13800,,13900
DKI JAKARTA,JAKARTA PUSAT,PASAR Z,BERAS,15000,15100,
DKI JAKARTA,JAKARTA PUSAT,PASAR Z,TELUR AYAM RAS,28000,28500,29000
";

fn table() -> PriceTable {
    PriceTable::from_reader(SAMPLE.as_bytes()).unwrap()
}

#[test]
fn date_headers_parse_as_dd_mm_yy() {
    let table = table();
    assert_eq!(
        table.dates(),
        &[
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        ]
    );
    assert_eq!(
        table.latest_date(),
        NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()
    );
}

#[test]
fn commodities_keep_dataset_order() {
    assert_eq!(
        table().commodities(),
        vec!["BERAS".to_string(), "TELUR AYAM RAS".to_string()]
    );
}

#[test]
fn provinces_normalize_case_and_whitespace() {
    // "Jawa Barat" and "JAWA BARAT " are the same province.
    let prices = table().provincial_prices("BERAS", PriceAggregation::Lowest);
    let provinces: Vec<&str> = prices.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(provinces, vec!["JAWA BARAT"]);
}

#[test]
fn lowest_and_highest_aggregate_per_province() {
    let sample = "\
Provinsi,Kabupaten Kota,Nama Pasar,Nama Variant,01/03/24
JAWA BARAT,KOTA BANDUNG,PASAR X,BERAS,14000
JAWA BARAT,KOTA BOGOR,PASAR Y,BERAS,13800
DKI JAKARTA,JAKARTA PUSAT,PASAR Z,BERAS,15000
";
    let table = PriceTable::from_reader(sample.as_bytes()).unwrap();

    let lowest = table.provincial_prices("BERAS", PriceAggregation::Lowest);
    assert_eq!(
        lowest,
        vec![
            ("DKI JAKARTA".to_string(), 15000.0),
            ("JAWA BARAT".to_string(), 13800.0),
        ]
    );

    let highest = table.provincial_prices("BERAS", PriceAggregation::Highest);
    assert_eq!(
        highest,
        vec![
            ("DKI JAKARTA".to_string(), 15000.0),
            ("JAWA BARAT".to_string(), 14000.0),
        ]
    );
}

#[test]
fn rows_without_latest_observation_drop_out() {
    // DKI JAKARTA's only BERAS row has an empty cell on 03/03/24.
    let prices = table().provincial_prices("BERAS", PriceAggregation::Lowest);
    assert!(prices.iter().all(|(p, _)| p != "DKI JAKARTA"));
}

#[test]
fn national_average_skips_missing_cells() {
    let series = table().national_average_series("BERAS");
    assert_eq!(series.len(), 3);

    // 01/03: (14000 + 13800 + 15000) / 3
    assert!((series[0].1 - 14266.666666666666).abs() < 1e-9);
    // 02/03: KOTA BOGOR missing -> (14100 + 15100) / 2
    assert_eq!(series[1].1, 14600.0);
    // 03/03: JAKARTA missing -> (14200 + 13900) / 2
    assert_eq!(series[2].1, 14050.0);

    // Chronological order.
    assert!(series.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn series_only_averages_the_selected_commodity() {
    let series = table().national_average_series("TELUR AYAM RAS");
    assert_eq!(series[0].1, 28000.0);
    assert_eq!(series[2].1, 29000.0);
}

#[test]
fn unexpected_leading_column_is_rejected() {
    let sample = "\
Province,Kabupaten Kota,Nama Pasar,Nama Variant,01/03/24
JAWA BARAT,KOTA BANDUNG,PASAR X,BERAS,14000
";
    let err = PriceTable::from_reader(sample.as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn { position: 0, .. }));
}

#[test]
fn non_date_trailing_header_is_rejected() {
    let sample = "\
Provinsi,Kabupaten Kota,Nama Pasar,Nama Variant,catatan
JAWA BARAT,KOTA BANDUNG,PASAR X,BERAS,14000
";
    let err = PriceTable::from_reader(sample.as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::BadDateHeader { .. }));
}

#[test]
fn table_without_observations_is_rejected() {
    let sample = "Provinsi,Kabupaten Kota,Nama Pasar,Nama Variant\n";
    let err = PriceTable::from_reader(sample.as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::NoDateColumns));
}

#[test]
fn unparsable_price_is_rejected() {
    let sample = "\
Provinsi,Kabupaten Kota,Nama Pasar,Nama Variant,01/03/24
JAWA BARAT,KOTA BANDUNG,PASAR X,BERAS,empat belas ribu
";
    let err = PriceTable::from_reader(sample.as_bytes()).unwrap_err();
    match err {
        DatasetError::BadPrice { value, row, column } => {
            assert_eq!(value, "empat belas ribu");
            assert_eq!(row, 1);
            assert_eq!(column, "01/03/24");
        }
        other => panic!("expected BadPrice, got {other:?}"),
    }
}
