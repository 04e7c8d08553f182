//! Sitemap Tools

mod utils;

pub mod types;

pub use types::*;

use crate::error::SitemapError;

/// Parse sitemap XML into either an index of child sitemaps or a set of page locations.
///
/// Entries without a `<loc>` (or with an empty one) are skipped. A document that is not
/// well-formed XML is [`SitemapError::Malformed`]; one whose root is neither `<sitemapindex>`
/// nor `<urlset>` is [`SitemapError::UnrecognizedShape`].
///
/// # Examples
/// ```
/// use oggalaxy::tools::sitemap::{parse_sitemap, SitemapDocument};
///
/// let xml = r#"<urlset><url><loc> https://example.com/a </loc></url></urlset>"#;
/// let doc = parse_sitemap(xml).unwrap();
/// assert_eq!(doc, SitemapDocument::UrlSet(vec!["https://example.com/a".to_string()]));
/// ```
pub fn parse_sitemap(xml: &str) -> Result<SitemapDocument, SitemapError> {
    utils::parse_document(xml)
}
