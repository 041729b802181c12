//! Asset quotes: generated history plus derived summary metrics.

use chrono::{DateTime, Duration, Utc};

use crate::services::random::{uniform_range, UniformSource};
use crate::services::series::generate_history;
use crate::types::{
    round_to, AssetClass, AssetMetrics, AssetQuote, CryptoMetrics, EquityMetrics, PricePoint,
    SymbolProfile,
};

/// Build a quote for `profile` over `num_days` of generated history.
///
/// History draws come first, then the metric draws in field order.
pub fn build_quote<S: UniformSource + ?Sized>(
    profile: &SymbolProfile,
    num_days: usize,
    anchor: DateTime<Utc>,
    rng: &mut S,
) -> AssetQuote {
    let history = generate_history(profile, num_days, anchor, rng);

    let current_price = history.last().map(|p| p.price).unwrap_or(profile.start_price);
    let previous_price = history
        .len()
        .checked_sub(2)
        .map(|i| history[i].price)
        .unwrap_or(current_price);

    let price_change = current_price - previous_price;
    let price_change_percent = price_change / previous_price * 100.0;

    let metrics = match profile.asset_class {
        AssetClass::Equity => AssetMetrics::Equity(equity_metrics(current_price, &history, rng)),
        AssetClass::Crypto => {
            AssetMetrics::Crypto(crypto_metrics(&profile.symbol, current_price, anchor, rng))
        }
    };

    AssetQuote {
        symbol: profile.symbol.clone(),
        asset_class: profile.asset_class,
        display_name: profile.display_name.clone(),
        current_price,
        price_change,
        price_change_percent,
        history,
        metrics,
    }
}

fn equity_metrics<S: UniformSource + ?Sized>(
    price: f64,
    history: &[PricePoint],
    rng: &mut S,
) -> EquityMetrics {
    let pe_ratio = round_to(uniform_range(rng, 10.0, 40.0), 2);
    let market_cap = price * uniform_range(rng, 1.0, 6.0) * 1e9;
    let dividend_yield = rng.next_uniform() * 0.03;
    let volume = (rng.next_uniform() * 10.0 + 1.0).floor() * 1e6;
    let avg_volume = (rng.next_uniform() * 10.0 + 1.0).floor() * 1e6;

    let high_52w = history.iter().map(|p| p.price).fold(f64::MIN, f64::max);
    let low_52w = history.iter().map(|p| p.price).fold(f64::MAX, f64::min);

    EquityMetrics {
        pe_ratio,
        market_cap,
        dividend_yield,
        volume,
        avg_volume,
        high_52w: if history.is_empty() { price } else { high_52w },
        low_52w: if history.is_empty() { price } else { low_52w },
    }
}

fn crypto_metrics<S: UniformSource + ?Sized>(
    symbol: &str,
    price: f64,
    anchor: DateTime<Utc>,
    rng: &mut S,
) -> CryptoMetrics {
    let market_cap = price * uniform_range(rng, 1.0, 6.0) * 1e9;
    let volume_24h = price * uniform_range(rng, 1.0, 6.0) * 1e8;
    let circulating_supply = (rng.next_uniform() * 100.0 + 10.0).floor() * 1e6;

    let max_supply = if symbol == "BTC" {
        Some(21e6)
    } else if rng.next_uniform() > 0.3 {
        Some((rng.next_uniform() * 1000.0 + 100.0).floor() * 1e6)
    } else {
        None
    };

    let all_time_high = price * (1.0 + rng.next_uniform());
    let days_since_ath = (rng.next_uniform() * 365.0).floor() as i64;

    CryptoMetrics {
        market_cap,
        volume_24h,
        circulating_supply,
        max_supply,
        all_time_high,
        all_time_high_date: anchor.date_naive() - Duration::days(days_since_ath),
        price_change_24h: uniform_range(rng, -5.0, 5.0),
        price_change_7d: uniform_range(rng, -10.0, 10.0),
        price_change_30d: uniform_range(rng, -20.0, 20.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::profiles::lookup;
    use crate::services::random::ScriptedSource;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_equity_quote_summary() {
        let profile = lookup("msft", AssetClass::Equity);
        let mut rng = StdRng::seed_from_u64(21);
        let quote = build_quote(&profile, 180, anchor(), &mut rng);

        assert_eq!(quote.symbol, "MSFT");
        assert_eq!(quote.display_name, "Microsoft Corporation");
        assert_eq!(quote.history.len(), 180);
        assert_eq!(quote.current_price, quote.history[179].price);
        assert_eq!(quote.price_change, quote.history[179].price - quote.history[178].price);

        let AssetMetrics::Equity(metrics) = &quote.metrics else {
            panic!("expected equity metrics");
        };
        assert!((10.0..=40.0).contains(&metrics.pe_ratio));
        assert!(metrics.high_52w >= quote.current_price);
        assert!(metrics.low_52w <= quote.current_price);
        assert!(metrics.volume >= 1e6 && metrics.volume <= 10e6);
    }

    #[test]
    fn test_crypto_quote_metrics() {
        let profile = lookup("BTC", AssetClass::Crypto);
        let mut rng = StdRng::seed_from_u64(22);
        let quote = build_quote(&profile, 30, anchor(), &mut rng);

        let AssetMetrics::Crypto(metrics) = &quote.metrics else {
            panic!("expected crypto metrics");
        };
        assert_eq!(metrics.max_supply, Some(21e6));
        assert!(metrics.all_time_high >= quote.current_price);
        assert!(metrics.all_time_high_date <= anchor().date_naive());
        assert!((-5.0..5.0).contains(&metrics.price_change_24h));
        assert!((-20.0..20.0).contains(&metrics.price_change_30d));
    }

    #[test]
    fn test_uncapped_crypto_supply() {
        let profile = lookup("NEWT", AssetClass::Crypto);
        // Every draw 0.2: the cap check (> 0.3) fails.
        let mut source = ScriptedSource::constant(0.2);
        let quote = build_quote(&profile, 5, anchor(), &mut source);

        let AssetMetrics::Crypto(metrics) = &quote.metrics else {
            panic!("expected crypto metrics");
        };
        assert_eq!(metrics.max_supply, None);
        assert_eq!(metrics.circulating_supply, 30e6);
    }

    #[test]
    fn test_single_point_history_has_no_change() {
        let profile = lookup("AAPL", AssetClass::Equity);
        let mut rng = StdRng::seed_from_u64(23);
        let quote = build_quote(&profile, 1, anchor(), &mut rng);
        assert_eq!(quote.price_change, 0.0);
        assert_eq!(quote.price_change_percent, 0.0);
    }
}
