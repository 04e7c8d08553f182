use super::types::FetchConfig;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{redirect, Client};
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;
const POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Build a reqwest client for the given settings.
pub(super) fn build_client(cfg: &FetchConfig) -> Result<Client, String> {
    let ua = HeaderValue::from_str(&cfg.user_agent)
        .map_err(|e| format!("invalid user agent '{}': {}", cfg.user_agent, e))?;
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, ua);

    Client::builder()
        .default_headers(headers)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(cfg.timeout)
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .build()
        .map_err(|e| format!("Failed to build client: {}", e))
}
