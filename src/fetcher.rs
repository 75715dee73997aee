use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{AppError, AppResult};

pub const MAX_IDLE_CONNECTIONS: usize = 10;
pub const IDLE_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);
pub const USER_AGENT: &str = concat!("ogfetch-server/", env!("CARGO_PKG_VERSION"));

/// Outbound page fetcher backed by one pooled `reqwest::Client`.
///
/// Cloning is cheap and shares the connection pool, so a single instance is
/// built at startup and handed to every request through `AppState`.
#[derive(Clone, Debug)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build the shared client. Response compression is never negotiated, so
    /// bodies arrive exactly as the origin sent them.
    pub fn new(timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS)
            .pool_idle_timeout(IDLE_CONNECTION_TIMEOUT)
            .no_gzip()
            .no_brotli()
            .no_deflate();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;
        Ok(PageFetcher { client })
    }

    /// GET `url` and return the response body as text, whatever the status.
    /// Failures are returned unlogged; the caller decides how to degrade.
    pub async fn fetch_body(&self, url: &str) -> AppResult<String> {
        let target = Url::parse(url).map_err(|_| AppError::InvalidUrl(url.to_string()))?;

        let response = self.client.get(target).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, url = %url, "Origin returned non-success status");
        }

        Ok(response.text().await?)
    }
}
