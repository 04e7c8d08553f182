use serde::{Deserialize, Serialize};

/// A parsed sitemap document: exactly one of the two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "locations", rename_all = "camelCase")]
pub enum SitemapDocument {
    /// `<sitemapindex>`: locations of child sitemaps.
    Index(Vec<String>),
    /// `<urlset>`: locations of pages.
    UrlSet(Vec<String>),
}

impl SitemapDocument {
    pub fn locations(&self) -> &[String] {
        match self {
            SitemapDocument::Index(locs) | SitemapDocument::UrlSet(locs) => locs,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, SitemapDocument::Index(_))
    }
}
