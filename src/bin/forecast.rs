//! Headless next-day forecast: the dashboard's prediction flow without the UI.

use chrono::NaiveDate;
use clap::Parser;
use hargapangan::domain::types::{MarketSelection, format_rupiah};
use hargapangan::infrastructure::artifacts;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the serialized model artifact
    #[arg(long, default_value = "data/model_rf_harga.json")]
    model: PathBuf,

    /// Path to the encoder registry artifact
    #[arg(long, default_value = "data/label_encoders.json")]
    encoders: PathBuf,

    /// Province label, as trained
    #[arg(long)]
    province: String,

    /// Regency/city label, as trained
    #[arg(long)]
    regency: String,

    /// Market label, as trained
    #[arg(long)]
    market: String,

    /// Commodity label, as trained
    #[arg(long)]
    commodity: String,

    /// Prediction date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let service = artifacts::load_forecast_service(&args.model, &args.encoders)?;

    let selection = MarketSelection {
        province: args.province,
        regency: args.regency,
        market: args.market,
        commodity: args.commodity,
    };

    let forecast = service.predict_today_and_tomorrow(&selection, args.date)?;

    println!(
        "{} @ {} / {} / {}",
        selection.commodity, selection.market, selection.regency, selection.province
    );
    println!(
        "  Today    ({}): {}",
        forecast.today.date,
        format_rupiah(forecast.today.price)
    );
    println!(
        "  Tomorrow ({}): {}",
        forecast.tomorrow.date,
        format_rupiah(forecast.tomorrow.price)
    );
    println!("  Direction: {}", forecast.direction);

    Ok(())
}
