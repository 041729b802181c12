use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::forecast::ForecastError;
use crate::services::indicators::IndicatorError;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    JsonBody(#[from] JsonRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forecast(ForecastError::EmptyHistory(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Forecast(ForecastError::InvalidPrice { .. }) => StatusCode::BAD_REQUEST,
            AppError::Indicator(_) => StatusCode::BAD_REQUEST,
            AppError::JsonBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::JsonBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::debug!("Rejected request ({}): {}", status, message);
        }

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
