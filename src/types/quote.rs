use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AssetClass, PricePoint};

/// Equity fundamentals shown beside the price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityMetrics {
    pub pe_ratio: f64,
    pub market_cap: f64,
    pub dividend_yield: f64,
    pub volume: f64,
    pub avg_volume: f64,
    pub high_52w: f64,
    pub low_52w: f64,
}

/// Crypto supply and performance figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoMetrics {
    pub market_cap: f64,
    pub volume_24h: f64,
    pub circulating_supply: f64,
    /// `None` for assets without a supply cap.
    pub max_supply: Option<f64>,
    pub all_time_high: f64,
    pub all_time_high_date: NaiveDate,
    pub price_change_24h: f64,
    pub price_change_7d: f64,
    pub price_change_30d: f64,
}

/// Asset-class specific metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetMetrics {
    Equity(EquityMetrics),
    Crypto(CryptoMetrics),
}

/// Price history plus summary for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQuote {
    pub symbol: String,
    pub asset_class: AssetClass,
    pub display_name: String,
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub history: Vec<PricePoint>,
    pub metrics: AssetMetrics,
}

/// Entry in the featured symbol list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedAsset {
    pub symbol: String,
    pub display_name: String,
}
