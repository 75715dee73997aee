// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    response::Html,
    routing,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ogfetch_server::{app::create_app, fetcher::PageFetcher, state::AppState};

pub const TEST_ORIGIN: &str = "https://editor.example.com";

pub const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Ignored title tag</title>
  <meta property="og:title" content="Example">
  <meta property="og:description" content="An example article">
  <meta property="og:image" content="https://cdn.example.com/cover.png">
  <meta property="og:image" content="https://cdn.example.com/second.png">
</head>
<body><p>Hello</p></body>
</html>"#;

pub const PLAIN_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>No Open Graph here</title>
  <meta name="description" content="plain description">
</head>
<body></body>
</html>"#;

pub const NOT_FOUND_HTML: &str =
    r#"<html><head><meta property="og:title" content="Page not found"></head></html>"#;

/// Routes served by the in-process origin the service fetches from.
fn origin_router() -> Router {
    Router::new()
        .route("/page", routing::get(|| async { Html(ARTICLE_HTML) }))
        .route("/plain", routing::get(|| async { Html(PLAIN_HTML) }))
        .route(
            "/gone",
            routing::get(|| async { (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)) }),
        )
        .route(
            "/accept-encoding",
            routing::get(|headers: HeaderMap| async move {
                headers
                    .get(header::ACCEPT_ENCODING)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("none")
                    .to_string()
            }),
        )
        .route(
            "/slow",
            routing::get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Html(ARTICLE_HTML)
            }),
        )
}

/// Serve the origin routes on an ephemeral local port.
pub async fn spawn_origin() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind origin listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, origin_router()).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn test_state(timeout: Duration) -> AppState {
    AppState {
        fetcher: PageFetcher::new(Some(timeout)).expect("Failed to build fetcher"),
        allow_origin: HeaderValue::from_static(TEST_ORIGIN),
    }
}

/// Build the full application router with a 5 second fetch timeout.
pub fn create_test_app() -> Router {
    create_app(test_state(Duration::from_secs(5)))
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn request(app: Router, method: Method, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    request(app, Method::GET, uri).await
}

/// Assert both CORS headers are present with the expected values.
pub fn assert_cors(response: &TestResponse) {
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(TEST_ORIGIN)
    );
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_HEADERS),
        Some("*")
    );
}
