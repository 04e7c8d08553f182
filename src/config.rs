//! Service Settings

use crate::tools::fetch::FetchConfig;

/// Pages processed per request by the domain entry point.
pub const SITEMAP_PROCESS_LIMIT: usize = 50;

/// Default pages processed per request by the list entry point.
pub const DEFAULT_PROCESS_LIMIT: usize = 50;

/// Upper bound a caller may request from the list entry point.
pub const MAX_PROCESS_LIMIT: usize = 200;

/// Concurrent page fetches per batch chunk.
pub const PROCESS_BATCH_SIZE: usize = 10;

/// All tunables of the pipeline, passed explicitly to the batch processor and handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub fetch: FetchConfig,
    pub batch_size: usize,
    pub sitemap_limit: usize,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            batch_size: PROCESS_BATCH_SIZE,
            sitemap_limit: SITEMAP_PROCESS_LIMIT,
            default_limit: DEFAULT_PROCESS_LIMIT,
            max_limit: MAX_PROCESS_LIMIT,
        }
    }
}

impl Settings {
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}
