use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Per-request failures of the preview pipeline.
///
/// None of these reach the caller as an error status: consumers of
/// `/fetchUrl` only ever see `200 OK`, either with an empty body (input
/// errors) or with a best-effort JSON envelope.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("target url is not defined in the request")]
    MissingUrl,

    #[error("invalid target url: {0}")]
    InvalidUrl(String),

    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Link preview request ended without a body");
        StatusCode::OK.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Startup configuration failures. These are fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("ALLOW_ORIGIN is not a valid header value: {0:?}")]
    InvalidAllowOrigin(String),

    #[error("FETCH_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}
