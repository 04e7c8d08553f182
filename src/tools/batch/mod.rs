//! Batch Tools


pub mod types;

pub use types::*;

use crate::tools::extract::{extract_page, PageResult};
use crate::tools::fetch::Fetcher;
use futures::future::join_all;
use std::future::Future;
use tracing::{debug, info};

/// Run `operation` over `items` in consecutive chunks of `chunk_size`.
///
/// Every future of a chunk runs concurrently and the whole chunk completes before the next one
/// starts, so at most `chunk_size` operations are ever in flight. Output order matches input
/// order regardless of completion order.
pub async fn batch<T, F, Fut, R>(items: Vec<T>, chunk_size: usize, operation: F) -> Vec<R>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = R>,
{
    let chunk_size = chunk_size.max(1);
    let mut results = Vec::with_capacity(items.len());
    let mut items = items.into_iter().peekable();
    let mut chunk_index = 0;

    while items.peek().is_some() {
        let chunk: Vec<Fut> = items.by_ref().take(chunk_size).map(&operation).collect();
        debug!(chunk = chunk_index, size = chunk.len(), "running chunk");
        results.extend(join_all(chunk).await);
        chunk_index += 1;
    }

    results
}

/// Extract the image of every URL, `batch_size` pages at a time. One result per URL, in order.
pub async fn process_all(
    fetcher: &dyn Fetcher,
    urls: &[String],
    batch_size: usize,
) -> Vec<PageResult> {
    let items: Vec<&str> = urls.iter().map(String::as_str).collect();
    let results = batch(items, batch_size, |url| extract_page(fetcher, url)).await;

    info!(
        pages = results.len(),
        found = results.iter().filter(|r| r.has_image()).count(),
        "batch complete"
    );
    results
}

/// Process the head of `window` and shape the report, returning the tail untouched.
pub async fn process_window(
    fetcher: &dyn Fetcher,
    window: ProcessingWindow,
    batch_size: usize,
) -> BatchReport {
    let results = process_all(fetcher, &window.processed, batch_size).await;
    BatchReport::new(results, window.unprocessed)
}
