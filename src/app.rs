use axum::{
    http::{header, HeaderValue, StatusCode},
    routing::{any, get},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
///
/// Every response, including the early returns of `/fetchUrl` and 404s,
/// carries `Access-Control-Allow-Origin` (the configured origin) and
/// `Access-Control-Allow-Headers: *`.
pub fn create_app(state: AppState) -> Router {
    let allow_origin = state.allow_origin.clone();

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/fetchUrl", any(handlers::fetch_url::fetch_url))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            allow_origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}
