use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse horizon code controlling candle count and forecast granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "15d")]
    FifteenDays,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "3y")]
    ThreeYears,
    /// Fallback for unrecognized codes: 30 daily periods.
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl Timeframe {
    /// Parse a known timeframe code.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1d" => Some(Self::OneDay),
            "1w" => Some(Self::OneWeek),
            "15d" => Some(Self::FifteenDays),
            "3m" => Some(Self::ThreeMonths),
            "6m" => Some(Self::SixMonths),
            "1y" => Some(Self::OneYear),
            "3y" => Some(Self::ThreeYears),
            "30d" => Some(Self::ThirtyDays),
            _ => None,
        }
    }

    /// Parse any string, falling back to the 30-day default.
    pub fn parse(s: &str) -> Self {
        Self::from_code(s).unwrap_or_else(|| {
            tracing::debug!("Unrecognized timeframe {:?}, using 30d default", s);
            Self::ThirtyDays
        })
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::FifteenDays => "15d",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::ThreeYears => "3y",
            Self::ThirtyDays => "30d",
        }
    }

    /// Number of candles and the spacing between them.
    pub fn candle_interval(&self) -> (usize, IntervalUnit) {
        match self {
            Self::OneDay => (24, IntervalUnit::Hour),
            Self::OneWeek => (7, IntervalUnit::Day),
            Self::FifteenDays => (15, IntervalUnit::Day),
            Self::ThreeMonths => (90, IntervalUnit::Day),
            Self::SixMonths => (180, IntervalUnit::Day),
            Self::OneYear => (52, IntervalUnit::Week),
            Self::ThreeYears => (156, IntervalUnit::Week),
            Self::ThirtyDays => (30, IntervalUnit::Day),
        }
    }

    /// Number of forecast periods and the volatility multiplier applied to them.
    ///
    /// 3m/6m forecast in weeks, 1y/3y in months.
    pub fn forecast_horizon(&self) -> (usize, f64) {
        match self {
            Self::OneDay => (24, 0.5),
            Self::OneWeek => (7, 1.0),
            Self::FifteenDays => (15, 1.2),
            Self::ThreeMonths => (12, 1.5),
            Self::SixMonths => (24, 1.8),
            Self::OneYear => (12, 2.0),
            Self::ThreeYears => (36, 3.0),
            Self::ThirtyDays => (30, 1.0),
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Self::OneDay
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Spacing between consecutive candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Hour,
    Day,
    Week,
}

impl IntervalUnit {
    pub fn duration(&self) -> Duration {
        match self {
            IntervalUnit::Hour => Duration::hours(1),
            IntervalUnit::Day => Duration::days(1),
            IntervalUnit::Week => Duration::weeks(1),
        }
    }
}

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// OHLCV candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Candle series response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandleSeries {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub candles: Vec<Candle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_parse_fallback() {
        assert_eq!(Timeframe::parse("1w"), Timeframe::OneWeek);
        assert_eq!(Timeframe::parse("3Y"), Timeframe::ThreeYears);
        assert_eq!(Timeframe::parse("5m"), Timeframe::ThirtyDays);
        assert_eq!(Timeframe::parse(""), Timeframe::ThirtyDays);
    }

    #[test]
    fn test_candle_interval_table() {
        assert_eq!(Timeframe::OneDay.candle_interval(), (24, IntervalUnit::Hour));
        assert_eq!(Timeframe::ThreeMonths.candle_interval(), (90, IntervalUnit::Day));
        assert_eq!(Timeframe::ThreeYears.candle_interval(), (156, IntervalUnit::Week));
        assert_eq!(Timeframe::ThirtyDays.candle_interval(), (30, IntervalUnit::Day));
    }

    #[test]
    fn test_forecast_horizon_table() {
        assert_eq!(Timeframe::OneDay.forecast_horizon(), (24, 0.5));
        assert_eq!(Timeframe::SixMonths.forecast_horizon(), (24, 1.8));
        assert_eq!(Timeframe::ThreeYears.forecast_horizon(), (36, 3.0));
        assert_eq!(Timeframe::ThirtyDays.forecast_horizon(), (30, 1.0));
    }

    #[test]
    fn test_timeframe_serialization() {
        assert_eq!(serde_json::to_string(&Timeframe::FifteenDays).unwrap(), "\"15d\"");
        let parsed: Timeframe = serde_json::from_str("\"6m\"").unwrap();
        assert_eq!(parsed, Timeframe::SixMonths);
    }
}
