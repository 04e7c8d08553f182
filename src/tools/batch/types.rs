use crate::tools::extract::PageResult;
use serde::{Deserialize, Serialize};

/// A URL list cut at a processing limit: the head is processed now, the tail is handed back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessingWindow {
    pub processed: Vec<String>,
    pub unprocessed: Vec<String>,
}

impl ProcessingWindow {
    /// Split `urls` after the first `limit` entries, keeping order.
    pub fn split(mut urls: Vec<String>, limit: usize) -> Self {
        let unprocessed = urls.split_off(limit.min(urls.len()));
        Self {
            processed: urls,
            unprocessed,
        }
    }

    pub fn total(&self) -> usize {
        self.processed.len() + self.unprocessed.len()
    }
}

/// Counts and partitioned results of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub processed: usize,
    pub found: usize,
    pub not_found: usize,
    pub unprocessed: usize,
    pub pages_with_images: Vec<PageResult>,
    pub pages_without_images: Vec<PageResult>,
    pub unprocessed_pages: Vec<String>,
}

impl BatchReport {
    /// Partition `results` by whether an image was found. Both partitions keep input order.
    pub fn new(results: Vec<PageResult>, unprocessed_pages: Vec<String>) -> Self {
        let processed = results.len();
        let (pages_with_images, pages_without_images): (Vec<_>, Vec<_>) =
            results.into_iter().partition(PageResult::has_image);

        Self {
            processed,
            found: pages_with_images.len(),
            not_found: pages_without_images.len(),
            unprocessed: unprocessed_pages.len(),
            pages_with_images,
            pages_without_images,
            unprocessed_pages,
        }
    }
}

/// [`BatchReport`] for a resolved domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapReport {
    pub domain: String,
    pub sitemap_url: String,
    pub total: usize,
    #[serde(flatten)]
    pub batch: BatchReport,
}
