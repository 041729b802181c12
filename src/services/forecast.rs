//! Forward price projection.
//!
//! A trend-plus-noise walk starting from the last historical close. The
//! trend direction is drawn once per run; the confidence band widens with
//! each period.

use chrono::NaiveDate;
use thiserror::Error;

use crate::services::random::{uniform_centered, UniformSource};
use crate::types::{
    AssetClass, Forecast, ForecastSummary, PricePoint, PredictionPoint, Recommendation, RiskLevel,
    Timeframe,
};

/// Lowest price the projection may reach.
pub const FORECAST_FLOOR_PRICE: f64 = 0.0001;

/// Trend added per period, scaled by the period index and volatility multiplier.
const TREND_STEP: f64 = 0.001;

/// Band half-width as a fraction of price: base plus growth per period.
const BAND_BASE: f64 = 0.02;
const BAND_GROWTH: f64 = 0.002;

/// Forecast errors.
#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("No price history available for {0}")]
    EmptyHistory(String),

    #[error("Invalid price {price} in {symbol} history on {date}")]
    InvalidPrice {
        symbol: String,
        date: NaiveDate,
        price: f64,
    },
}

/// Project `timeframe` periods forward from the last point of `history`.
///
/// Every history price must be finite and positive; nothing is drawn otherwise.
/// Draw order: trend direction, one draw per period, then confidence.
pub fn forecast<S: UniformSource + ?Sized>(
    asset_class: AssetClass,
    symbol: &str,
    timeframe: Timeframe,
    history: &[PricePoint],
    rng: &mut S,
) -> Result<Forecast, ForecastError> {
    if let Some(bad) = history.iter().find(|p| !(p.price.is_finite() && p.price > 0.0)) {
        return Err(ForecastError::InvalidPrice {
            symbol: symbol.to_string(),
            date: bad.date,
            price: bad.price,
        });
    }

    let last_price = history
        .last()
        .map(|p| p.price)
        .ok_or_else(|| ForecastError::EmptyHistory(symbol.to_string()))?;

    let (intervals, multiplier) = timeframe.forecast_horizon();
    let volatility = asset_class.forecast_volatility() * multiplier;
    let trend = if rng.next_uniform() > 0.5 { 1.0 } else { -1.0 };

    let mut predicted_price = last_price;
    let mut predictions = Vec::with_capacity(intervals);

    for day in 1..=intervals {
        let step = day as f64;
        let random_factor = uniform_centered(rng) * volatility;
        let trend_factor = trend * step * TREND_STEP * multiplier;
        let change = predicted_price * (random_factor + trend_factor);

        predicted_price = (predicted_price + change).max(FORECAST_FLOOR_PRICE);

        let half_width = predicted_price * (BAND_BASE + step * BAND_GROWTH * multiplier);

        predictions.push(PredictionPoint {
            offset: day as u32,
            prediction: asset_class.round_price(predicted_price),
            lower_bound: asset_class.round_price(predicted_price - half_width),
            upper_bound: asset_class.round_price(predicted_price + half_width),
        });
    }

    let target_price = predictions.last().map(|p| p.prediction).unwrap_or(last_price);
    let percent_change = (target_price - last_price) / last_price * 100.0;

    let risk_measure = if predictions.is_empty() {
        0.0
    } else {
        predictions
            .iter()
            .map(|p| (p.upper_bound - p.lower_bound).abs())
            .sum::<f64>()
            / predictions.len() as f64
            / last_price
    };

    let confidence = 0.70 + rng.next_uniform() * 0.20;

    let summary = ForecastSummary {
        target_price,
        confidence,
        risk_level: RiskLevel::from_measure(risk_measure),
        recommendation: Recommendation::from_percent_change(percent_change),
        percent_change,
        risk_measure,
    };

    Ok(Forecast {
        symbol: symbol.to_string(),
        asset_class,
        timeframe,
        predictions,
        summary,
    })
}
