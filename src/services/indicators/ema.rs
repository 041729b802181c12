//! Exponential Moving Average (EMA) indicator.

use super::{check_period, IndicatorError};
use crate::types::IndicatorSeries;

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices. The first value, at
/// index `period - 1`, is the simple average of the first `period` closes.
#[derive(Debug, Clone, Copy)]
pub struct Ema {
    period: usize,
}

impl Default for Ema {
    fn default() -> Self {
        Self { period: 9 }
    }
}

impl Ema {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            period: check_period("EMA", period)?,
        })
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Smoothing factor `2 / (period + 1)`.
    pub fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    pub fn calculate(&self, prices: &[f64]) -> IndicatorSeries {
        let mut series = vec![None; prices.len()];
        if prices.len() < self.period {
            return series;
        }

        let multiplier = self.multiplier();

        // First EMA is SMA
        let mut ema = prices[..self.period].iter().sum::<f64>() / self.period as f64;
        series[self.period - 1] = Some(ema);

        for (i, price) in prices.iter().enumerate().skip(self.period) {
            ema = (price - ema) * multiplier + ema;
            series[i] = Some(ema);
        }

        series
    }
}
