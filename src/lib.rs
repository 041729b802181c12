//! Augur - synthetic market data and forecast server

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

use std::sync::Arc;

use config::Config;
use services::MarketEngine;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<MarketEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = Arc::new(MarketEngine::new(&config));
        Self {
            config: Arc::new(config),
            engine,
        }
    }
}

// Re-export commonly used types
pub use types::*;
