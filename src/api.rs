use crate::config::Settings;
use crate::error::HandlerError;
use crate::tools::batch::{process_window, BatchReport, ProcessingWindow, SitemapReport};
use crate::tools::fetch::{Fetcher, HttpFetcher};
use crate::tools::resolve::resolve;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const URLS_REQUIRED: &str = "URLs are required";

/* ------------ public facade components ------------ */

/// Everything a request needs: the transport and the tunables. Built once, shared by reference.
#[derive(Clone)]
pub struct Components {
    pub fetcher: Arc<dyn Fetcher>,
    pub settings: Settings,
}

impl Components {
    /// Components backed by a real HTTP client configured from `settings.fetch`.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(&settings.fetch).map_err(anyhow::Error::msg)?;
        Ok(Self::with_fetcher(Arc::new(fetcher), settings))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, settings: Settings) -> Self {
        Self { fetcher, settings }
    }
}

/// Resolver output without page processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveSummary {
    pub sitemap_url: String,
    pub host: String,
    pub total: usize,
    pub urls: Vec<String>,
}

/* ------------ entry points ------------ */

/// Resolve a domain's sitemap and extract images for the first `sitemap_limit` pages.
pub async fn resolve_and_extract(
    components: &Components,
    input: &str,
) -> Result<SitemapReport, HandlerError> {
    let settings = &components.settings;
    let resolved = resolve(&*components.fetcher, input).await?;
    let total = resolved.page_urls.len();

    let window = ProcessingWindow::split(resolved.page_urls, settings.sitemap_limit);
    let batch = process_window(&*components.fetcher, window, settings.batch_size).await;
    info!(
        domain = %resolved.host,
        total,
        processed = batch.processed,
        found = batch.found,
        "domain processed"
    );

    Ok(SitemapReport {
        domain: resolved.host,
        sitemap_url: resolved.sitemap_url,
        total,
        batch,
    })
}

/// Extract images for the head of a caller-supplied list, handing back the rest.
///
/// `urls` must already be sanitized (see [`sanitize_urls`]); an empty list is an input error.
pub async fn extract_given_list(
    components: &Components,
    urls: Vec<String>,
    limit: usize,
) -> Result<BatchReport, HandlerError> {
    if urls.is_empty() {
        return Err(HandlerError::Input(URLS_REQUIRED.to_string()));
    }

    let window = ProcessingWindow::split(urls, limit);
    let report = process_window(
        &*components.fetcher,
        window,
        components.settings.batch_size,
    )
    .await;
    info!(
        processed = report.processed,
        found = report.found,
        unprocessed = report.unprocessed,
        "list processed"
    );
    Ok(report)
}

/// Run only the resolver and list every page URL found.
pub async fn resolve_only(
    components: &Components,
    input: &str,
) -> Result<ResolveSummary, HandlerError> {
    let resolved = resolve(&*components.fetcher, input).await?;
    Ok(ResolveSummary {
        sitemap_url: resolved.sitemap_url,
        host: resolved.host,
        total: resolved.page_urls.len(),
        urls: resolved.page_urls,
    })
}

/* ------------ request body helpers ------------ */

/// Site input from a request body: `domain` first, then `input`. Blank values count as absent.
pub fn domain_input(body: &Value) -> Option<&str> {
    ["domain", "input"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|value| !value.trim().is_empty())
}

/// Keep the non-blank strings of a JSON array, trimmed. Anything but an array yields nothing.
pub fn sanitize_urls(urls: Option<&Value>) -> Vec<String> {
    match urls {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Processing limit for the list entry point, clamped to `[1, max_limit]`.
///
/// Numbers are truncated and strings contribute their leading integer (`"12abc"` is 12);
/// anything without one falls back to `default_limit`.
pub fn batch_limit(limit: Option<&Value>, settings: &Settings) -> usize {
    let parsed = match limit {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => leading_integer(s),
        _ => None,
    };

    match parsed {
        Some(n) => n.clamp(1, settings.max_limit as i64) as usize,
        None => settings.default_limit,
    }
}

/// Optional whitespace, optional sign, then at least one decimal digit.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // saturates on overflow
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
