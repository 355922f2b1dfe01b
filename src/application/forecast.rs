//! Next-day forecast orchestration.
//!
//! Runs the whole prediction flow for one user action: encode the selection
//! for the chosen date, score it, repeat for the next calendar day, classify
//! the move. The flow either completes or fails with the originating error;
//! no partial result ever reaches the caller.

use crate::application::ml::predictor::PricePredictor;
use crate::domain::encoding::EncoderRegistry;
use crate::domain::errors::PredictionError;
use crate::domain::features;
use crate::domain::types::{DayPrice, Direction, Forecast, MarketSelection};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Immutable prediction context: the loaded encoders and model.
///
/// Built once at startup, shared read-only with the UI for the lifetime of
/// the process. Nothing here is reloaded or mutated after construction.
pub struct ForecastService {
    encoders: Arc<EncoderRegistry>,
    predictor: Arc<dyn PricePredictor>,
}

impl ForecastService {
    pub fn new(encoders: Arc<EncoderRegistry>, predictor: Arc<dyn PricePredictor>) -> Self {
        Self {
            encoders,
            predictor,
        }
    }

    /// Known labels per field, for populating selection widgets.
    pub fn encoders(&self) -> &EncoderRegistry {
        &self.encoders
    }

    /// Predicts today's and tomorrow's price and the direction of the move.
    ///
    /// Tomorrow is exactly `date + 1 day`; month and year rollovers follow
    /// the calendar. Encoding or inference failures abort the whole flow.
    pub fn predict_today_and_tomorrow(
        &self,
        selection: &MarketSelection,
        date: NaiveDate,
    ) -> Result<Forecast, PredictionError> {
        let today_record = features::assemble(&self.encoders, selection, date)?;
        let price_today = self.predictor.predict(&today_record)?;

        let tomorrow = date
            .succ_opt()
            .ok_or(PredictionError::DateOverflow { date })?;
        let tomorrow_record = features::assemble(&self.encoders, selection, tomorrow)?;
        let price_tomorrow = self.predictor.predict(&tomorrow_record)?;

        let direction = Direction::of(price_today, price_tomorrow);
        info!(
            "Forecast {} @ {}: {:.2} -> {:.2} ({})",
            selection.commodity, date, price_today, price_tomorrow, direction
        );

        Ok(Forecast {
            today: DayPrice {
                date,
                price: price_today,
            },
            tomorrow: DayPrice {
                date: tomorrow,
                price: price_tomorrow,
            },
            direction,
        })
    }
}
