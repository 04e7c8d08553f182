//! Resolve Tools

mod utils;

pub mod types;

pub use types::*;

use crate::error::{ResolveError, SourceError};
use crate::tools::fetch::Fetcher;
use crate::tools::sitemap::{parse_sitemap, SitemapDocument};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Find a site's sitemap and flatten its tree into a deduplicated list of page URLs.
///
/// `input` may be a bare host (`example.com`), a site URL, or the URL of a sitemap document.
/// Candidates are tried in order; the first one that fetches and parses wins. Nested sitemap
/// indexes are followed depth-first, each document is fetched at most once per candidate, and
/// children that fail are skipped.
///
/// # Examples
/// ```no_run
/// use oggalaxy::tools::fetch::{FetchConfig, HttpFetcher};
/// use oggalaxy::tools::resolve::resolve;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::new(&FetchConfig::default())?;
/// let resolved = resolve(&fetcher, "example.com").await?;
/// println!("{} pages from {}", resolved.page_urls.len(), resolved.sitemap_url);
/// # Ok(())
/// # }
/// ```
pub async fn resolve(fetcher: &dyn Fetcher, input: &str) -> Result<ResolvedSitemap, ResolveError> {
    let url = utils::normalize_input(input)?;
    let host = utils::host_with_port(&url);
    let candidates = utils::sitemap_candidates(&url);

    let mut last_error = None;
    for candidate in &candidates {
        debug!(candidate = %candidate, "trying sitemap location");

        let root = match load(fetcher, candidate).await {
            Ok(doc) => doc,
            Err(e) => {
                debug!(candidate = %candidate, error = %e, "candidate unavailable");
                last_error = Some(e);
                continue;
            }
        };

        let page_urls = walk(fetcher, candidate, root).await;
        info!(sitemap = %candidate, pages = page_urls.len(), "resolved sitemap");

        return Ok(ResolvedSitemap {
            page_urls,
            host,
            sitemap_url: candidate.clone(),
        });
    }

    Err(ResolveError::NoSitemapFound {
        host,
        attempts: candidates.len(),
        last_error,
    })
}

/// Fetch and parse one sitemap document.
async fn load(fetcher: &dyn Fetcher, url: &str) -> Result<SitemapDocument, SourceError> {
    let xml = fetcher.fetch(url).await?;
    parse_sitemap(&xml).map_err(|source| SourceError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Depth-first traversal from an already loaded root document.
///
/// Index children are visited in document order. A URL is marked visited just before it is
/// fetched, so self references and cycles terminate.
async fn walk(fetcher: &dyn Fetcher, root_url: &str, root: SitemapDocument) -> Vec<String> {
    let mut visited: HashSet<String> = HashSet::from([root_url.to_string()]);
    let mut pages = PageAccumulator::default();
    let mut stack: Vec<String> = Vec::new();

    absorb(root, &mut stack, &mut pages);

    while let Some(url) = stack.pop() {
        if !visited.insert(url.clone()) {
            continue;
        }

        match load(fetcher, &url).await {
            Ok(doc) => absorb(doc, &mut stack, &mut pages),
            Err(e) => warn!(sitemap = %url, error = %e, "skipping child sitemap"),
        }
    }

    pages.into_vec()
}

fn absorb(doc: SitemapDocument, stack: &mut Vec<String>, pages: &mut PageAccumulator) {
    match doc {
        SitemapDocument::Index(children) => stack.extend(children.into_iter().rev()),
        SitemapDocument::UrlSet(locations) => {
            for location in locations {
                pages.push(location);
            }
        }
    }
}

/// Insertion-ordered set of page URLs.
#[derive(Default)]
struct PageAccumulator {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl PageAccumulator {
    fn push(&mut self, url: String) {
        if self.seen.insert(url.clone()) {
            self.ordered.push(url);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
