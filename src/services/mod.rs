//! Synthetic market engine services.

pub mod engine;
pub mod forecast;
pub mod indicators;
pub mod profiles;
pub mod quotes;
pub mod random;
pub mod series;
pub mod snapshot;

pub use engine::MarketEngine;
pub use forecast::ForecastError;
pub use indicators::IndicatorError;
pub use random::UniformSource;
