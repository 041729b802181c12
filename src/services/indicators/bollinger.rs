//! Bollinger Bands indicator.

use super::{check_period, IndicatorError};
use crate::types::BollingerSeries;

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(period)
/// - Upper band: SMA + k * StdDev
/// - Lower band: SMA - k * StdDev
///
/// The standard deviation is the population (biased) one over the window.
#[derive(Debug, Clone, Copy)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Result<Self, IndicatorError> {
        if !(std_dev_multiplier.is_finite() && std_dev_multiplier > 0.0) {
            return Err(IndicatorError::InvalidStdDev(std_dev_multiplier));
        }
        Ok(Self {
            period: check_period("Bollinger", period)?,
            std_dev_multiplier,
        })
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Population standard deviation via `sqrt(E[x^2] - E[x]^2)`.
    fn std_dev(window: &[f64], mean: f64) -> f64 {
        let mean_sq = window.iter().map(|v| v * v).sum::<f64>() / window.len() as f64;
        // Cancellation can push a flat window slightly below zero
        (mean_sq - mean * mean).max(0.0).sqrt()
    }

    pub fn calculate(&self, prices: &[f64]) -> BollingerSeries {
        let len = prices.len();
        let mut bands = BollingerSeries {
            middle: vec![None; len],
            upper: vec![None; len],
            lower: vec![None; len],
        };

        for (i, window) in prices.windows(self.period).enumerate() {
            let idx = i + self.period - 1;
            let middle = window.iter().sum::<f64>() / self.period as f64;
            let width = self.std_dev_multiplier * Self::std_dev(window, middle);

            bands.middle[idx] = Some(middle);
            bands.upper[idx] = Some(middle + width);
            bands.lower[idx] = Some(middle - width);
        }

        bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::indicators::Sma;

    #[test]
    fn test_bollinger_scenario() {
        let bands = BollingerBands::new(5, 2.0)
            .unwrap()
            .calculate(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!(bands.middle[..4].iter().all(Option::is_none));
        assert_eq!(bands.middle[4], Some(3.0));

        let sigma = 2f64.sqrt();
        let upper = bands.upper[4].unwrap();
        let lower = bands.lower[4].unwrap();
        assert!((upper - (3.0 + 2.0 * sigma)).abs() < 1e-9);
        assert!((lower - (3.0 - 2.0 * sigma)).abs() < 1e-9);
        assert!((upper - 5.828).abs() < 1e-3);
        assert!((lower - 0.172).abs() < 1e-3);
    }

    #[test]
    fn test_middle_band_matches_sma() {
        let prices: Vec<f64> = (0..40).map(|i| 50.0 + (i % 7) as f64).collect();
        let bands = BollingerBands::default().calculate(&prices);
        let sma = Sma::new(20).unwrap().calculate(&prices);
        assert_eq!(bands.middle, sma);
    }

    #[test]
    fn test_flat_series_has_zero_width() {
        let bands = BollingerBands::new(4, 2.0).unwrap().calculate(&[4.0; 10]);
        for i in 3..10 {
            assert_eq!(bands.upper[i], bands.middle[i]);
            assert_eq!(bands.lower[i], bands.middle[i]);
        }
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        assert_eq!(
            BollingerBands::new(20, 0.0).unwrap_err(),
            IndicatorError::InvalidStdDev(0.0)
        );
        assert!(BollingerBands::new(20, f64::NAN).is_err());
        assert!(BollingerBands::new(0, 2.0).is_err());
    }
}
