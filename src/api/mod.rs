pub mod assets;
pub mod candles;
pub mod health;
pub mod indicators;
pub mod markets;
pub mod prediction;

use axum::Router;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{AppError, Result};
use crate::types::{AssetClass, Timeframe};
use crate::AppState;

/// API response wrapper matching frontend expectations
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    pub cached: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta { cached: false },
        }
    }
}

/// Parse the `:type` route segment.
pub(crate) fn parse_asset_class(segment: &str) -> Result<AssetClass> {
    AssetClass::from_str(segment).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid asset type '{}'. Must be \"stock\" or \"crypto\".",
            segment
        ))
    })
}

/// Timeframe from an optional query value; missing means 1d, unknown means 30d.
pub(crate) fn parse_timeframe(value: Option<&str>) -> Timeframe {
    value.map(Timeframe::parse).unwrap_or_default()
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(assets::router())
        .merge(indicators::router())
        .merge(markets::router())
        .nest("/api/candles", candles::router())
        .nest("/api/prediction", prediction::router())
}

/// Full application with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
