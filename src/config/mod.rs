use std::env;
use std::time::Duration;

use axum::http::HeaderValue;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
/// Empty allow-origin: browsers refuse cross-origin reads until one is configured.
const DEFAULT_ALLOW_ORIGIN: &str = "";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub allow_origin: HeaderValue,
    /// `None` means outbound fetches never time out.
    pub fetch_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST")
            .ok()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) if !raw.is_empty() => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            _ => DEFAULT_PORT,
        };

        let origin = env::var("ALLOW_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOW_ORIGIN.to_string());
        let allow_origin = HeaderValue::from_str(&origin)
            .map_err(|_| ConfigError::InvalidAllowOrigin(origin.clone()))?;

        let timeout_secs = match env::var("FETCH_TIMEOUT_SECS") {
            Ok(raw) if !raw.is_empty() => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            _ => DEFAULT_FETCH_TIMEOUT_SECS,
        };
        let fetch_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Ok(Config {
            host,
            port,
            allow_origin,
            fetch_timeout,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
