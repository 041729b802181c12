use std::env;

use crate::types::IndicatorParams;

/// Fewest history days a quote can be built from (current plus previous close).
pub const MIN_HISTORY_DAYS: usize = 2;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Days of daily history generated per quote.
    pub history_days: usize,
    /// Fixed RNG seed. When set, every request replays the same draws.
    pub rng_seed: Option<u64>,
    /// Indicator parameters used when a request omits them.
    pub indicators: IndicatorParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            history_days: 180,
            rng_seed: None,
            indicators: IndicatorParams::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let indicator_defaults = defaults.indicators;

        let requested_days = parse_var("HISTORY_DAYS").unwrap_or(defaults.history_days);
        let history_days = if requested_days < MIN_HISTORY_DAYS {
            tracing::warn!(
                "HISTORY_DAYS={} is below the minimum, using {}",
                requested_days,
                MIN_HISTORY_DAYS
            );
            MIN_HISTORY_DAYS
        } else {
            requested_days
        };

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            history_days,
            rng_seed: parse_var("RNG_SEED"),
            indicators: IndicatorParams {
                sma_period: parse_var("SMA_PERIOD").unwrap_or(indicator_defaults.sma_period),
                ema_period: parse_var("EMA_PERIOD").unwrap_or(indicator_defaults.ema_period),
                bollinger_period: parse_var("BOLLINGER_PERIOD")
                    .unwrap_or(indicator_defaults.bollinger_period),
                bollinger_stddev: parse_var("BOLLINGER_STDDEV")
                    .unwrap_or(indicator_defaults.bollinger_stddev),
                rsi_period: parse_var("RSI_PERIOD").unwrap_or(indicator_defaults.rsi_period),
            },
        }
    }
}
