use serde::{Deserialize, Serialize};

/// Outcome of a successful sitemap resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSitemap {
    /// Deduplicated page URLs in discovery order.
    pub page_urls: Vec<String>,
    /// Host (and port, if explicit) of the resolved input.
    pub host: String,
    /// The candidate location that produced the tree.
    pub sitemap_url: String,
}
