//! Simple Moving Average (SMA) indicator.

use super::{check_period, IndicatorError};
use crate::types::IndicatorSeries;

/// SMA (Simple Moving Average) indicator.
///
/// Arithmetic mean of the last `period` closes. Defined from index
/// `period - 1` onward.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Default for Sma {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Sma {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            period: check_period("SMA", period)?,
        })
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn calculate(&self, prices: &[f64]) -> IndicatorSeries {
        let mut series = vec![None; prices.len()];

        for (i, window) in prices.windows(self.period).enumerate() {
            let mean = window.iter().sum::<f64>() / self.period as f64;
            series[i + self.period - 1] = Some(mean);
        }

        series
    }
}
