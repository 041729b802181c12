//! Price forecast endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::{parse_asset_class, parse_timeframe, ApiResponse};
use crate::error::Result;
use crate::types::{Forecast, PricePoint};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PredictionQuery {
    pub timeframe: Option<String>,
}

/// Body for forecasting from a caller-supplied history.
#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub history: Vec<PricePoint>,
    #[serde(default)]
    pub timeframe: Option<String>,
}

/// Create the prediction router.
pub fn router() -> Router<AppState> {
    Router::new().route("/:type/:symbol", get(get_prediction).post(post_prediction))
}

/// GET /api/prediction/:type/:symbol?timeframe=
async fn get_prediction(
    State(state): State<AppState>,
    Path((asset_type, symbol)): Path<(String, String)>,
    Query(query): Query<PredictionQuery>,
) -> Result<Json<ApiResponse<Forecast>>> {
    let asset_class = parse_asset_class(&asset_type)?;
    let timeframe = parse_timeframe(query.timeframe.as_deref());
    let forecast = state.engine.forecast(asset_class, &symbol, timeframe)?;
    Ok(Json(ApiResponse::new(forecast)))
}

/// POST /api/prediction/:type/:symbol
async fn post_prediction(
    State(state): State<AppState>,
    Path((asset_type, symbol)): Path<(String, String)>,
    body: std::result::Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Forecast>>> {
    let Json(request) = body?;
    let asset_class = parse_asset_class(&asset_type)?;
    let timeframe = parse_timeframe(request.timeframe.as_deref());
    let forecast = state
        .engine
        .forecast_from(asset_class, &symbol, timeframe, &request.history)?;
    Ok(Json(ApiResponse::new(forecast)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::AppError;
    use crate::types::{AssetClass, Timeframe};
    use axum::http::StatusCode;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(Config {
            rng_seed: Some(17),
            ..Config::default()
        })
    }

    fn path(asset_type: &str, symbol: &str) -> Path<(String, String)> {
        Path((asset_type.to_string(), symbol.to_string()))
    }

    #[tokio::test]
    async fn test_get_prediction_defaults_to_one_day() {
        let query = Query(PredictionQuery::default());
        let Json(response) = get_prediction(State(state()), path("crypto", "eth"), query)
            .await
            .unwrap();
        let forecast = response.data;
        assert_eq!(forecast.symbol, "ETH");
        assert_eq!(forecast.asset_class, AssetClass::Crypto);
        assert_eq!(forecast.timeframe, Timeframe::OneDay);
        assert_eq!(forecast.predictions.len(), 24);
    }

    #[tokio::test]
    async fn test_get_prediction_three_years() {
        let query = PredictionQuery {
            timeframe: Some("3y".to_string()),
        };
        let Json(response) = get_prediction(State(state()), path("stock", "AAPL"), Query(query))
            .await
            .unwrap();
        assert_eq!(response.data.predictions.len(), 36);
        let last = response.data.predictions.last().unwrap();
        assert_eq!(response.data.summary.target_price, last.prediction);
    }

    #[tokio::test]
    async fn test_post_prediction_uses_supplied_history() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let request = PredictionRequest {
            history: vec![PricePoint { date, price: 50.0 }],
            timeframe: Some("1w".to_string()),
        };
        let body = Ok(Json(request));
        let Json(response) = post_prediction(State(state()), path("stock", "acme"), body)
            .await
            .unwrap();
        assert_eq!(response.data.symbol, "ACME");
        assert_eq!(response.data.predictions.len(), 7);
        let first = response.data.predictions[0].prediction;
        assert!((first - 50.0).abs() < 5.0);
    }

    #[tokio::test]
    async fn test_post_prediction_empty_history() {
        let request = PredictionRequest {
            history: Vec::new(),
            timeframe: None,
        };
        let err = post_prediction(State(state()), path("crypto", "btc"), Ok(Json(request)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forecast(_)));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_post_prediction_rejects_non_positive_prices() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for price in [0.0, -50.0] {
            let request = PredictionRequest {
                history: vec![PricePoint { date, price }],
                timeframe: Some("1w".to_string()),
            };
            let err = post_prediction(State(state()), path("stock", "acme"), Ok(Json(request)))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Forecast(_)), "{:?}", err);
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
