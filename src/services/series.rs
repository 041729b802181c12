//! Synthetic price series generation.
//!
//! Daily closes come from a random walk whose step draw is centred on 0.48
//! rather than 0.5, so it drifts slightly upward. Candles come from an
//! unbiased walk whose interval spacing depends on the timeframe.

use chrono::{DateTime, Duration, Utc};

use crate::services::random::{uniform_centered, UniformSource};
use crate::types::{round_to, Candle, PricePoint, SymbolProfile, Timeframe};

/// Lowest price a candle may print.
pub const CANDLE_FLOOR_PRICE: f64 = 0.0001;

/// Decimals candle prices are rounded to.
pub const CANDLE_PRECISION: u32 = 4;

/// Subtracted from each uniform step draw. Mean step is `+0.02 * volatility`.
const HISTORY_STEP_BIAS: f64 = 0.48;

/// Generate `num_days` daily closes ending the day before `anchor`.
///
/// Each step moves the price by `(r - 0.48) * volatility * price` and floors
/// it at the asset class minimum. One draw per day.
pub fn generate_history<S: UniformSource + ?Sized>(
    profile: &SymbolProfile,
    num_days: usize,
    anchor: DateTime<Utc>,
    rng: &mut S,
) -> Vec<PricePoint> {
    let asset_class = profile.asset_class;
    let floor = asset_class.floor_price();
    let start_date = anchor.date_naive() - Duration::days(num_days as i64);

    let mut current_price = profile.start_price;
    let mut history = Vec::with_capacity(num_days);

    for day in 0..num_days {
        let change = (rng.next_uniform() - HISTORY_STEP_BIAS) * profile.volatility * current_price;
        current_price = (current_price + change).max(floor);

        history.push(PricePoint {
            date: start_date + Duration::days(day as i64),
            price: asset_class.round_price(current_price),
        });
    }

    history
}

/// Generate OHLCV candles for a timeframe, ending one interval before `anchor`.
///
/// Per interval three draws are taken: the close move, the wick range and
/// the volume multiplier.
pub fn generate_candles<S: UniformSource + ?Sized>(
    timeframe: Timeframe,
    base_price: f64,
    volatility: f64,
    anchor: DateTime<Utc>,
    rng: &mut S,
) -> Vec<Candle> {
    let (intervals, unit) = timeframe.candle_interval();
    let step = unit.duration();
    let start = anchor - step * intervals as i32;

    let mut price = base_price.max(CANDLE_FLOOR_PRICE);
    let mut candles = Vec::with_capacity(intervals);

    for i in 0..intervals {
        let change_percent = uniform_centered(rng) * volatility;

        let open = price;
        price = (price + price * change_percent).max(CANDLE_FLOOR_PRICE);
        let close = price;

        let wick_range = (open - close).abs() * (1.0 + rng.next_uniform());
        let high = open.max(close) + wick_range / 2.0;
        let low = (open.min(close) - wick_range / 2.0).max(CANDLE_FLOOR_PRICE);

        let volume = base_price * 1000.0 * (1.0 + rng.next_uniform() * change_percent.abs() * 10.0);

        candles.push(Candle {
            timestamp: start + step * i as i32,
            open: round_to(open, CANDLE_PRECISION),
            high: round_to(high, CANDLE_PRECISION),
            low: round_to(low, CANDLE_PRECISION),
            close: round_to(close, CANDLE_PRECISION),
            volume: volume.max(0.0).floor() as u64,
        });
    }

    candles
}
