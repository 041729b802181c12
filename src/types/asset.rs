use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset class a symbol belongs to.
///
/// Each class carries its own price floor, display precision and base
/// forecast volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "stock")]
    Equity,
    #[serde(rename = "crypto")]
    Crypto,
}

impl AssetClass {
    /// Parse from a route segment. Accepts "stock", "equity" and "crypto".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stock" | "stocks" | "equity" => Some(Self::Equity),
            "crypto" | "cryptocurrency" => Some(Self::Crypto),
            _ => None,
        }
    }

    /// Route name used by the HTTP surface.
    pub fn route_name(&self) -> &'static str {
        match self {
            Self::Equity => "stock",
            Self::Crypto => "crypto",
        }
    }

    /// Smallest price a generated history point may take.
    pub fn floor_price(&self) -> f64 {
        match self {
            Self::Equity => 0.1,
            Self::Crypto => 0.0001,
        }
    }

    /// Number of decimals prices are rounded to.
    pub fn precision(&self) -> u32 {
        match self {
            Self::Equity => 2,
            Self::Crypto => 4,
        }
    }

    /// Per-period volatility the forecast simulator starts from.
    pub fn forecast_volatility(&self) -> f64 {
        match self {
            Self::Equity => 0.02,
            Self::Crypto => 0.03,
        }
    }

    /// Round a price to this class's display precision.
    pub fn round_price(&self, value: f64) -> f64 {
        round_to(value, self.precision())
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.route_name())
    }
}

/// Seed parameters for a synthetic symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolProfile {
    /// Normalized (uppercase) symbol.
    pub symbol: String,
    pub asset_class: AssetClass,
    pub display_name: String,
    /// Price the random walk starts from.
    pub start_price: f64,
    /// Relative per-step volatility, in (0, 1).
    pub volatility: f64,
}

/// Round `value` to `decimals` decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
