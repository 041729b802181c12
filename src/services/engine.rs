//! Request-level facade over the synthetic market engine.
//!
//! Holds only immutable settings. Each call builds its own random generator,
//! so concurrent requests share no mutable state.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::Config;
use crate::services::forecast::{forecast, ForecastError};
use crate::services::indicators::{self, IndicatorError};
use crate::services::profiles::{featured, lookup};
use crate::services::quotes::build_quote;
use crate::services::series::{generate_candles, generate_history};
use crate::services::snapshot::market_snapshot;
use crate::types::{
    AssetClass, AssetQuote, CandleSeries, FeaturedAsset, Forecast, IndicatorParams, IndicatorSet,
    MarketSnapshot, PricePoint, Timeframe,
};

/// Synthetic market engine.
#[derive(Debug, Clone)]
pub struct MarketEngine {
    history_days: usize,
    rng_seed: Option<u64>,
    indicator_defaults: IndicatorParams,
}

impl MarketEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            history_days: config.history_days,
            rng_seed: config.rng_seed,
            indicator_defaults: config.indicators,
        }
    }

    /// Fresh generator for one request.
    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn history_days(&self) -> usize {
        self.history_days
    }

    pub fn indicator_defaults(&self) -> IndicatorParams {
        self.indicator_defaults
    }

    pub fn featured(&self, asset_class: AssetClass) -> Vec<FeaturedAsset> {
        featured(asset_class)
    }

    /// Price history and summary metrics for a symbol.
    pub fn quote(&self, symbol: &str, asset_class: AssetClass) -> AssetQuote {
        let profile = lookup(symbol, asset_class);
        let quote = build_quote(&profile, self.history_days, Utc::now(), &mut self.rng());
        debug!(
            "Generated {} quote for {} ({} points, last {})",
            asset_class,
            quote.symbol,
            quote.history.len(),
            quote.current_price
        );
        quote
    }

    /// OHLCV candles for a symbol over a timeframe.
    pub fn candles(
        &self,
        symbol: &str,
        asset_class: AssetClass,
        timeframe: Timeframe,
    ) -> CandleSeries {
        let profile = lookup(symbol, asset_class);
        let candles = generate_candles(
            timeframe,
            profile.start_price,
            profile.volatility,
            Utc::now(),
            &mut self.rng(),
        );
        debug!("Generated {} {} candles for {}", candles.len(), timeframe, profile.symbol);

        CandleSeries {
            symbol: profile.symbol,
            timeframe,
            candles,
        }
    }

    /// Indicators over a caller-supplied closing-price series.
    pub fn indicators(
        &self,
        prices: &[f64],
        params: &IndicatorParams,
    ) -> Result<IndicatorSet, IndicatorError> {
        debug!("Computing indicators over {} prices with {:?}", prices.len(), params);
        indicators::compute(prices, params)
    }

    /// Indicators over the closes of freshly generated candles.
    pub fn candle_indicators(
        &self,
        symbol: &str,
        asset_class: AssetClass,
        timeframe: Timeframe,
        params: &IndicatorParams,
    ) -> Result<(CandleSeries, IndicatorSet), IndicatorError> {
        let series = self.candles(symbol, asset_class, timeframe);
        let closes: Vec<f64> = series.candles.iter().map(|c| c.close).collect();
        let set = self.indicators(&closes, params)?;
        Ok((series, set))
    }

    /// Forecast from a caller-supplied history.
    pub fn forecast_from(
        &self,
        asset_class: AssetClass,
        symbol: &str,
        timeframe: Timeframe,
        history: &[PricePoint],
    ) -> Result<Forecast, ForecastError> {
        let symbol = symbol.trim().to_uppercase();
        forecast(asset_class, &symbol, timeframe, history, &mut self.rng())
    }

    /// Generate a history for the symbol, then forecast from it.
    pub fn forecast(
        &self,
        asset_class: AssetClass,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Forecast, ForecastError> {
        let profile = lookup(symbol, asset_class);
        let mut rng = self.rng();
        let history = generate_history(&profile, self.history_days, Utc::now(), &mut rng);
        let result = forecast(asset_class, &profile.symbol, timeframe, &history, &mut rng)?;

        debug!(
            "Forecast {} {}: target {} ({:.2}%), {} / {} risk",
            profile.symbol,
            timeframe,
            result.summary.target_price,
            result.summary.percent_change,
            result.summary.recommendation.label(),
            result.summary.risk_level.label()
        );
        Ok(result)
    }

    /// Values for every tracked world index.
    pub fn market_snapshot(&self) -> Vec<MarketSnapshot> {
        market_snapshot(&mut self.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> MarketEngine {
        MarketEngine::new(&Config {
            rng_seed: Some(seed),
            history_days: 60,
            ..Config::default()
        })
    }

    #[test]
    fn test_seeded_engine_is_reproducible() {
        let engine = seeded(99);
        let a = engine.candles("AAPL", AssetClass::Equity, Timeframe::OneWeek);
        let b = engine.candles("aapl", AssetClass::Equity, Timeframe::OneWeek);
        let closes = |s: &CandleSeries| s.candles.iter().map(|c| c.close).collect::<Vec<_>>();
        assert_eq!(closes(&a), closes(&b));
        assert_eq!(a.symbol, "AAPL");
    }

    #[test]
    fn test_quote_uses_configured_history() {
        let engine = seeded(1);
        let quote = engine.quote("ETH", AssetClass::Crypto);
        assert_eq!(quote.history.len(), 60);
        assert_eq!(quote.display_name, "Ethereum");
    }

    #[test]
    fn test_forecast_starts_from_generated_history() {
        let engine = seeded(5);
        let quote = engine.quote("TSLA", AssetClass::Equity);
        let result = engine.forecast(AssetClass::Equity, "tsla", Timeframe::OneWeek).unwrap();
        // Same seed, same history draws.
        let first = result.predictions[0].prediction;
        let last_close = quote.current_price;
        assert!((first - last_close).abs() / last_close < 0.05);
        assert_eq!(result.symbol, "TSLA");
    }

    #[test]
    fn test_forecast_from_empty_history() {
        let engine = seeded(5);
        let err = engine
            .forecast_from(AssetClass::Crypto, "btc", Timeframe::OneDay, &[])
            .unwrap_err();
        assert_eq!(err, ForecastError::EmptyHistory("BTC".to_string()));
    }

    #[test]
    fn test_candle_indicators_align_with_candles() {
        let engine = seeded(8);
        let (series, set) = engine
            .candle_indicators(
                "SOL",
                AssetClass::Crypto,
                Timeframe::ThreeMonths,
                &IndicatorParams::default(),
            )
            .unwrap();
        assert_eq!(series.candles.len(), 90);
        assert_eq!(set.sma.len(), 90);
        assert_eq!(set.rsi.len(), 90);
    }

    #[test]
    fn test_seeded_snapshot_repeats() {
        let engine = seeded(3);
        assert_eq!(engine.market_snapshot(), engine.market_snapshot());
    }
}
