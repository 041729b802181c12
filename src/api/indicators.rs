//! Technical indicator endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{parse_asset_class, parse_timeframe, ApiResponse};
use crate::error::{AppError, Result};
use crate::types::{Candle, IndicatorParams, IndicatorSet, Timeframe};
use crate::AppState;

/// Per-request indicator settings. Omitted fields fall back to the configured defaults.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct IndicatorOverrides {
    pub sma: Option<usize>,
    pub ema: Option<usize>,
    pub bollinger: Option<usize>,
    pub stddev: Option<f64>,
    pub rsi: Option<usize>,
}

impl IndicatorOverrides {
    pub fn apply(&self, defaults: IndicatorParams) -> IndicatorParams {
        IndicatorParams {
            sma_period: self.sma.unwrap_or(defaults.sma_period),
            ema_period: self.ema.unwrap_or(defaults.ema_period),
            bollinger_period: self.bollinger.unwrap_or(defaults.bollinger_period),
            bollinger_stddev: self.stddev.unwrap_or(defaults.bollinger_stddev),
            rsi_period: self.rsi.unwrap_or(defaults.rsi_period),
        }
    }
}

/// Query for chart indicators.
#[derive(Debug, Default, Deserialize)]
pub struct ChartIndicatorQuery {
    pub timeframe: Option<String>,
    pub sma: Option<usize>,
    pub ema: Option<usize>,
    pub bollinger: Option<usize>,
    pub stddev: Option<f64>,
    pub rsi: Option<usize>,
}

impl ChartIndicatorQuery {
    fn overrides(&self) -> IndicatorOverrides {
        IndicatorOverrides {
            sma: self.sma,
            ema: self.ema,
            bollinger: self.bollinger,
            stddev: self.stddev,
            rsi: self.rsi,
        }
    }
}

/// Body for indicators over caller-supplied prices.
#[derive(Debug, Deserialize)]
pub struct IndicatorRequest {
    pub prices: Vec<f64>,
    #[serde(flatten)]
    pub overrides: IndicatorOverrides,
}

/// Candles with indicators computed over their closes.
#[derive(Debug, Serialize)]
pub struct ChartIndicators {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub params: IndicatorParams,
    pub candles: Vec<Candle>,
    pub indicators: IndicatorSet,
}

/// Indicators over a caller-supplied series.
#[derive(Debug, Serialize)]
pub struct SeriesIndicators {
    pub params: IndicatorParams,
    pub indicators: IndicatorSet,
}

/// Create the indicators router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/indicators", post(post_indicators))
        .route("/api/indicators/:type/:symbol", get(get_chart_indicators))
}

/// GET /api/indicators/:type/:symbol
async fn get_chart_indicators(
    State(state): State<AppState>,
    Path((asset_type, symbol)): Path<(String, String)>,
    Query(query): Query<ChartIndicatorQuery>,
) -> Result<Json<ApiResponse<ChartIndicators>>> {
    let asset_class = parse_asset_class(&asset_type)?;
    let timeframe = parse_timeframe(query.timeframe.as_deref());
    let params = query.overrides().apply(state.engine.indicator_defaults());

    let (series, indicators) = state
        .engine
        .candle_indicators(&symbol, asset_class, timeframe, &params)?;

    Ok(Json(ApiResponse::new(ChartIndicators {
        symbol: series.symbol,
        timeframe: series.timeframe,
        params,
        candles: series.candles,
        indicators,
    })))
}

/// POST /api/indicators
async fn post_indicators(
    State(state): State<AppState>,
    body: std::result::Result<Json<IndicatorRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SeriesIndicators>>> {
    let Json(request) = body?;
    if request.prices.iter().any(|p| !p.is_finite()) {
        return Err(AppError::BadRequest("Prices must be finite numbers".to_string()));
    }

    let params = request.overrides.apply(state.engine.indicator_defaults());
    let indicators = state.engine.indicators(&request.prices, &params)?;

    Ok(Json(ApiResponse::new(SeriesIndicators { params, indicators })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::http::StatusCode;

    fn state() -> AppState {
        AppState::new(Config {
            rng_seed: Some(9),
            ..Config::default()
        })
    }

    #[test]
    fn test_overrides_fall_back_to_defaults() {
        let overrides = IndicatorOverrides {
            sma: Some(5),
            stddev: Some(1.5),
            ..IndicatorOverrides::default()
        };
        let params = overrides.apply(IndicatorParams::default());
        assert_eq!(params.sma_period, 5);
        assert_eq!(params.bollinger_stddev, 1.5);
        assert_eq!(params.ema_period, 9);
        assert_eq!(params.rsi_period, 14);
    }

    #[test]
    fn test_request_deserialization() {
        let request: IndicatorRequest =
            serde_json::from_str(r#"{"prices": [1.0, 2.0, 3.0], "sma": 2, "rsi": 1}"#).unwrap();
        assert_eq!(request.prices.len(), 3);
        assert_eq!(request.overrides.sma, Some(2));
        assert_eq!(request.overrides.rsi, Some(1));
        assert_eq!(request.overrides.ema, None);
    }

    #[tokio::test]
    async fn test_post_indicators() {
        let request = IndicatorRequest {
            prices: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            overrides: IndicatorOverrides {
                sma: Some(3),
                ..IndicatorOverrides::default()
            },
        };
        let Json(response) = post_indicators(State(state()), Ok(Json(request))).await.unwrap();
        let sma = &response.data.indicators.sma;
        assert_eq!(sma, &vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
        // Default windows exceed the input length.
        assert!(response.data.indicators.rsi.iter().all(Option::is_none));
    }

    #[tokio::test]
    async fn test_post_indicators_rejects_zero_period() {
        let request = IndicatorRequest {
            prices: vec![1.0, 2.0],
            overrides: IndicatorOverrides {
                ema: Some(0),
                ..IndicatorOverrides::default()
            },
        };
        let err = post_indicators(State(state()), Ok(Json(request))).await.unwrap_err();
        assert!(matches!(err, AppError::Indicator(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_post_indicators_rejects_non_finite() {
        let request = IndicatorRequest {
            prices: vec![1.0, f64::NAN],
            overrides: IndicatorOverrides::default(),
        };
        let err = post_indicators(State(state()), Ok(Json(request))).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_chart_indicators() {
        let query = ChartIndicatorQuery {
            timeframe: Some("6m".to_string()),
            rsi: Some(7),
            ..ChartIndicatorQuery::default()
        };
        let path = Path(("stock".to_string(), "msft".to_string()));
        let Json(response) = get_chart_indicators(State(state()), path, Query(query))
            .await
            .unwrap();
        let data = response.data;
        assert_eq!(data.symbol, "MSFT");
        assert_eq!(data.candles.len(), 180);
        assert_eq!(data.params.rsi_period, 7);
        assert_eq!(data.indicators.rsi.len(), 180);
        assert!(data.indicators.rsi[6].is_none());
        assert!(data.indicators.rsi[7].is_some());
        assert!(data.indicators.sma[19].is_some());
    }
}
