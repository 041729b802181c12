use serde::{Deserialize, Serialize};

/// Derived series aligned index-for-index with its source prices.
/// `None` marks positions before the indicator's window has filled.
pub type IndicatorSeries = Vec<Option<f64>>;

/// Bollinger band triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub middle: IndicatorSeries,
    pub upper: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// All indicators computed over one price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma: IndicatorSeries,
    pub ema: IndicatorSeries,
    pub bollinger: BollingerSeries,
    pub rsi: IndicatorSeries,
}

/// Indicator window parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorParams {
    pub sma_period: usize,
    pub ema_period: usize,
    pub bollinger_period: usize,
    pub bollinger_stddev: f64,
    pub rsi_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 9,
            bollinger_period: 20,
            bollinger_stddev: 2.0,
            rsi_period: 14,
        }
    }
}
