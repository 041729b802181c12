//! Relative Strength Index (RSI) indicator.

use super::{check_period, IndicatorError};
use crate::types::IndicatorSeries;

/// Stand-in for a zero average loss.
pub const ZERO_LOSS_EPSILON: f64 = 0.001;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
///
/// Averages are seeded from the first `period` deltas and then Wilder-smoothed.
/// The first value, at index `period`, already includes one smoothing step.
#[derive(Debug, Clone, Copy)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            period: check_period("RSI", period)?,
        })
    }

    pub fn period(&self) -> usize {
        self.period
    }

    fn split(change: f64) -> (f64, f64) {
        if change >= 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        }
    }

    pub fn calculate(&self, prices: &[f64]) -> IndicatorSeries {
        let period = self.period;
        let mut series = vec![None; prices.len()];
        if prices.len() <= period {
            return series;
        }

        let (gains, losses) = prices[..=period]
            .windows(2)
            .map(|w| Self::split(w[1] - w[0]))
            .fold((0.0, 0.0), |(g, l), (gain, loss)| (g + gain, l + loss));

        let mut avg_gain = gains / period as f64;
        let mut avg_loss = losses / period as f64;

        for i in period..prices.len() {
            let (gain, loss) = Self::split(prices[i] - prices[i - 1]);

            avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;

            let denominator = if avg_loss == 0.0 { ZERO_LOSS_EPSILON } else { avg_loss };
            let rs = avg_gain / denominator;
            series[i] = Some(100.0 - 100.0 / (1.0 + rs));
        }

        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 + i as f64 * 1.5).collect()
    }

    fn downtrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 200.0 - i as f64 * 1.5).collect()
    }

    #[test]
    fn test_rsi_warmup() {
        let series = Rsi::default().calculate(&uptrend(30));
        assert!(series[..14].iter().all(Option::is_none));
        assert!(series[14..].iter().all(Option::is_some));
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let series = Rsi::default().calculate(&uptrend(14));
        assert_eq!(series.len(), 14);
        assert!(series.iter().all(Option::is_none));
    }

    #[test]
    fn test_rsi_uptrend_high_value() {
        let series = Rsi::default().calculate(&uptrend(50));
        let last = series.last().unwrap().unwrap();
        // No losses: RS = gain / 0.001
        let expected = 100.0 - 100.0 / (1.0 + 1.5 / ZERO_LOSS_EPSILON);
        assert!((last - expected).abs() < 1e-9);
        assert!(last > 99.0);
    }

    #[test]
    fn test_rsi_downtrend_is_zero() {
        let series = Rsi::default().calculate(&downtrend(50));
        assert_eq!(series.last().unwrap().unwrap(), 0.0);
    }

    #[test]
    fn test_rsi_flat_series_is_zero() {
        let series = Rsi::new(3).unwrap().calculate(&[5.0; 8]);
        assert!(series[3..].iter().all(|v| *v == Some(0.0)));
    }

    #[test]
    fn test_rsi_exact_first_value() {
        // Deltas: +2, -1, +2, -1. Seed over period 2: gain 1, loss 0.5.
        // Index 2 smooths in delta -1 once more: gain 0.5, loss 0.75, RSI 40.
        let series = Rsi::new(2).unwrap().calculate(&[10.0, 12.0, 11.0, 13.0, 12.0]);
        assert_eq!(series[0], None);
        assert_eq!(series[1], None);
        let first = series[2].unwrap();
        assert!((first - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_bounded() {
        let prices: Vec<f64> = (0..200)
            .map(|i| 100.0 + ((i * 37) % 23) as f64 - 11.0 + (i as f64 * 0.3).cos() * 8.0)
            .collect();
        for period in [1, 2, 5, 14, 50] {
            let series = Rsi::new(period).unwrap().calculate(&prices);
            for value in series.into_iter().flatten() {
                assert!((0.0..=100.0).contains(&value), "period {} value {}", period, value);
            }
        }
    }
}
