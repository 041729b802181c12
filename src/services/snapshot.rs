//! World index snapshot, independent of the symbol engine.

use crate::services::random::{uniform_range, UniformSource};
use crate::types::{round_to, MapPosition, MarketIndex, MarketSnapshot, Region};

const fn index(
    code: &'static str,
    name: &'static str,
    region: Region,
    country: &'static str,
    currency: &'static str,
    x: u32,
    y: u32,
) -> MarketIndex {
    MarketIndex {
        code,
        name,
        region,
        country,
        currency,
        position: MapPosition { x, y },
    }
}

/// Tracked world indices with their approximate world map positions.
pub const WORLD_INDICES: &[MarketIndex] = &[
    // Americas
    index("SPX", "S&P 500", Region::Americas, "USA", "USD", 200, 180),
    index("DJI", "Dow Jones", Region::Americas, "USA", "USD", 220, 170),
    index("IXIC", "NASDAQ", Region::Americas, "USA", "USD", 180, 170),
    index("TSX", "Toronto SE", Region::Americas, "Canada", "CAD", 220, 150),
    index("BOVESPA", "Brazil Bovespa", Region::Americas, "Brazil", "BRL", 280, 300),
    // Europe
    index("FTSE", "FTSE 100", Region::Europe, "UK", "GBP", 400, 150),
    index("DAX", "DAX", Region::Europe, "Germany", "EUR", 430, 160),
    index("CAC", "CAC 40", Region::Europe, "France", "EUR", 420, 170),
    index("IBEX", "IBEX 35", Region::Europe, "Spain", "EUR", 400, 180),
    index("FTSEMIB", "FTSE MIB", Region::Europe, "Italy", "EUR", 430, 180),
    // Asia
    index("NIKKEI", "Nikkei 225", Region::Asia, "Japan", "JPY", 700, 180),
    index("HSI", "Hang Seng", Region::Asia, "Hong Kong", "HKD", 650, 210),
    index("SSE", "Shanghai", Region::Asia, "China", "CNY", 670, 190),
    index("KOSPI", "KOSPI", Region::Asia, "South Korea", "KRW", 680, 180),
    index("SENSEX", "BSE SENSEX", Region::Asia, "India", "INR", 580, 220),
    index("ASX", "ASX 200", Region::Asia, "Australia", "AUD", 700, 320),
];

/// Draw a fresh value for every tracked index. Two draws per index.
pub fn market_snapshot<S: UniformSource + ?Sized>(rng: &mut S) -> Vec<MarketSnapshot> {
    WORLD_INDICES
        .iter()
        .map(|idx| {
            let base_value = uniform_range(rng, 5000.0, 25000.0);
            let change_percent = uniform_range(rng, -3.0, 3.0);
            let change = base_value * (change_percent / 100.0);

            MarketSnapshot {
                index_code: idx.code.to_string(),
                display_name: idx.name.to_string(),
                region: idx.region,
                country: idx.country.to_string(),
                currency: idx.currency.to_string(),
                value: round_to(base_value + change, 2),
                change: round_to(change, 2),
                change_percent: round_to(change_percent, 2),
                position: idx.position,
            }
        })
        .collect()
}
