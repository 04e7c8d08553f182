//! Extract Tools

mod tests;

pub mod types;

pub use types::*;

use crate::selectors::OG_IMAGE_SELECTORS;
use crate::tools::fetch::Fetcher;
use scraper::Html;
use tracing::warn;

/// Pull the Open Graph image URL out of an HTML document.
///
/// Tag variants are tried in priority order (`property="og:image"`, `property="og:image:url"`,
/// `name="og:image"`); the first non-empty `content` wins.
///
/// # Examples
/// ```
/// use oggalaxy::tools::extract::extract_og_image;
///
/// let html = r#"<head><meta property="og:image" content="https://cdn.example.com/a.png"></head>"#;
/// assert_eq!(extract_og_image(html).as_deref(), Some("https://cdn.example.com/a.png"));
/// assert_eq!(extract_og_image("<p>no tags</p>"), None);
/// ```
pub fn extract_og_image(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    OG_IMAGE_SELECTORS.iter().find_map(|selector| {
        doc.select(selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    })
}

/// Fetch one page and look up its image. Never fails: a fetch error yields `og_image: None`.
pub async fn extract_page(fetcher: &dyn Fetcher, url: &str) -> PageResult {
    match fetcher.fetch(url).await {
        Ok(html) => PageResult::new(url, extract_og_image(&html)),
        Err(e) => {
            warn!(url, error = %e, "page fetch failed");
            PageResult::new(url, None)
        }
    }
}
