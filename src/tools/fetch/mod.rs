//! Fetch Tools

mod client;

#[cfg(test)]
pub(crate) mod stub;

pub mod types;

pub use types::*;

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Retrieves the raw text of a document.
///
/// Implementations never panic or raise past this boundary: every failure is a [`FetchError`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Fetcher`] backed by a pooled reqwest client.
///
/// # Examples
/// ```no_run
/// use oggalaxy::tools::fetch::{FetchConfig, Fetcher, HttpFetcher};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::new(&FetchConfig::default())?;
/// let xml = fetcher.fetch("https://example.com/sitemap.xml").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    pub fn new(cfg: &FetchConfig) -> Result<Self, String> {
        Ok(Self {
            client: client::build_client(cfg)?,
            timeout_secs: cfg.timeout.as_secs(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.network_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| self.network_error(url, e))
    }
}

impl HttpFetcher {
    fn network_error(&self, url: &str, err: reqwest::Error) -> FetchError {
        let message = if err.is_timeout() {
            format!("timed out after {}s", self.timeout_secs)
        } else {
            err.to_string()
        };
        FetchError::Network {
            url: url.to_string(),
            message,
        }
    }
}
