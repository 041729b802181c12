//! Technical indicator implementations.
//!
//! Every indicator consumes a closing-price series and returns a series of
//! the same length; positions before the window has filled are `None`.

pub mod bollinger;
pub mod ema;
pub mod rsi;
pub mod sma;

pub use bollinger::BollingerBands;
pub use ema::Ema;
pub use rsi::Rsi;
pub use sma::Sma;

use thiserror::Error;

use crate::types::{IndicatorParams, IndicatorSet};

/// Indicator parameter errors.
#[derive(Debug, Error, PartialEq)]
pub enum IndicatorError {
    #[error("{name} period must be at least 1, got {period}")]
    InvalidPeriod { name: &'static str, period: usize },

    #[error("Bollinger standard deviation multiplier must be positive, got {0}")]
    InvalidStdDev(f64),
}

/// Reject a zero-length window.
pub(crate) fn check_period(name: &'static str, period: usize) -> Result<usize, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { name, period });
    }
    Ok(period)
}

/// Compute SMA, EMA, Bollinger Bands and RSI over one price series.
pub fn compute(prices: &[f64], params: &IndicatorParams) -> Result<IndicatorSet, IndicatorError> {
    let sma = Sma::new(params.sma_period)?;
    let ema = Ema::new(params.ema_period)?;
    let bollinger = BollingerBands::new(params.bollinger_period, params.bollinger_stddev)?;
    let rsi = Rsi::new(params.rsi_period)?;

    Ok(IndicatorSet {
        sma: sma.calculate(prices),
        ema: ema.calculate(prices),
        bollinger: bollinger.calculate(prices),
        rsi: rsi.calculate(prices),
    })
}
