use serde::{Deserialize, Serialize};

use super::{AssetClass, Timeframe};

/// Qualitative risk of a forecast, from the width of its confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a mean band width relative to the last price.
    pub fn from_measure(measure: f64) -> Self {
        if measure > 0.3 {
            RiskLevel::High
        } else if measure > 0.15 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Buy/sell recommendation derived from the projected percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Sell,
    #[serde(rename = "Strong Sell")]
    StrongSell,
}

impl Recommendation {
    /// Map a percent change onto a recommendation. All thresholds are strict.
    pub fn from_percent_change(percent_change: f64) -> Self {
        if percent_change > 15.0 {
            Recommendation::StrongBuy
        } else if percent_change > 5.0 {
            Recommendation::Buy
        } else if percent_change > -5.0 {
            Recommendation::Hold
        } else if percent_change > -15.0 {
            Recommendation::Sell
        } else {
            Recommendation::StrongSell
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Sell => "Sell",
            Recommendation::StrongSell => "Strong Sell",
        }
    }
}

/// One projected period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    /// 1-based period index (hours, days, weeks or months depending on timeframe).
    pub offset: u32,
    pub prediction: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Headline figures for a forecast run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub target_price: f64,
    /// Between 0.70 and 0.90.
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    /// Target vs. last historical price, in percent.
    pub percent_change: f64,
    /// Mean band width divided by the last historical price.
    pub risk_measure: f64,
}

/// Complete forecast response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub symbol: String,
    pub asset_class: AssetClass,
    pub timeframe: Timeframe,
    pub predictions: Vec<PredictionPoint>,
    #[serde(rename = "metrics")]
    pub summary: ForecastSummary,
}
