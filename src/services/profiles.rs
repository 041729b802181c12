//! Static seed parameters for the synthetic symbol universe.

use crate::types::{AssetClass, FeaturedAsset, SymbolProfile};

/// Known equities: (symbol, name, start price, volatility).
pub const EQUITY_PROFILES: &[(&str, &str, f64, f64)] = &[
    ("AAPL", "Apple Inc.", 180.0, 0.015),
    ("MSFT", "Microsoft Corporation", 350.0, 0.012),
    ("GOOGL", "Alphabet Inc.", 140.0, 0.018),
    ("AMZN", "Amazon.com, Inc.", 130.0, 0.02),
    ("META", "Meta Platforms, Inc.", 300.0, 0.022),
    ("TSLA", "Tesla, Inc.", 240.0, 0.03),
    ("NVDA", "NVIDIA Corporation", 400.0, 0.025),
];

/// Known crypto assets: (symbol, name, start price, volatility).
pub const CRYPTO_PROFILES: &[(&str, &str, f64, f64)] = &[
    ("BTC", "Bitcoin", 50000.0, 0.025),
    ("ETH", "Ethereum", 3000.0, 0.03),
    ("BNB", "Binance Coin", 400.0, 0.028),
    ("SOL", "Solana", 100.0, 0.04),
    ("XRP", "Ripple", 0.5, 0.035),
    ("ADA", "Cardano", 0.4, 0.038),
];

fn table(asset_class: AssetClass) -> &'static [(&'static str, &'static str, f64, f64)] {
    match asset_class {
        AssetClass::Equity => EQUITY_PROFILES,
        AssetClass::Crypto => CRYPTO_PROFILES,
    }
}

/// Trim and uppercase a user-supplied symbol.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Look up the profile for a symbol.
///
/// Unknown symbols get a default profile named after the symbol itself, so
/// any string renders.
pub fn lookup(symbol: &str, asset_class: AssetClass) -> SymbolProfile {
    let symbol = normalize_symbol(symbol);

    if let Some(&(_, name, start_price, volatility)) =
        table(asset_class).iter().find(|(s, ..)| *s == symbol)
    {
        return SymbolProfile {
            symbol,
            asset_class,
            display_name: name.to_string(),
            start_price,
            volatility,
        };
    }

    let (display_name, start_price, volatility) = match asset_class {
        AssetClass::Equity => (format!("{} Inc.", symbol), 100.0, 0.02),
        AssetClass::Crypto => (format!("{}coin", symbol), 10.0, 0.03),
    };

    SymbolProfile {
        symbol,
        asset_class,
        display_name,
        start_price,
        volatility,
    }
}

/// Symbols with a dedicated profile, in table order.
pub fn featured(asset_class: AssetClass) -> Vec<FeaturedAsset> {
    table(asset_class)
        .iter()
        .map(|(symbol, name, ..)| FeaturedAsset {
            symbol: symbol.to_string(),
            display_name: name.to_string(),
        })
        .collect()
}
