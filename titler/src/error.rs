use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("VTT error: {0}")]
    Vtt(#[from] vtt::VttError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("initialization failed: {0}")]
    Initialization(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) | AppError::Vtt(_) | AppError::Io(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Initialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "ok": false, "error": self.to_string() }))).into_response()
    }
}
