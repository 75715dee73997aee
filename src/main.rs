use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ogfetch_server::app::create_app;
use ogfetch_server::config::Config;
use ogfetch_server::fetcher::PageFetcher;
use ogfetch_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ogfetch_server=debug,tower_http=info"));

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = Config::from_env().expect("Failed to load configuration");
    info!(
        host = %config.host,
        port = config.port,
        allow_origin = ?config.allow_origin,
        fetch_timeout = ?config.fetch_timeout,
        "Configuration loaded"
    );

    let fetcher = PageFetcher::new(config.fetch_timeout).expect("Failed to build HTTP client");

    let app_state = AppState {
        fetcher,
        allow_origin: config.allow_origin.clone(),
    };

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = create_app(app_state)
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    let addr = config.server_addr();
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
