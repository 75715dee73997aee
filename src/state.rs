use axum::http::HeaderValue;

use crate::fetcher::PageFetcher;

/// Shared application state passed to all handlers.
/// Built once at startup; the fetcher's connection pool is reused across
/// requests rather than created per call.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: PageFetcher,
    pub allow_origin: HeaderValue,
}
