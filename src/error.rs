use thiserror::Error;

/// Failure to retrieve a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } | FetchError::Network { url, .. } => url,
        }
    }
}

/// Failure to interpret a document as a sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SitemapError {
    #[error("malformed sitemap XML: {0}")]
    Malformed(String),

    #[error("unrecognized sitemap shape: root element <{0}> is neither <sitemapindex> nor <urlset>")]
    UnrecognizedShape(String),
}

/// Why a single sitemap document could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: SitemapError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Domain is required")]
    EmptyInput,

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("unsupported scheme '{0}': only http and https are allowed")]
    UnsupportedScheme(String),

    #[error("No sitemap found for {host} (tried {attempts} locations{})", describe_last(.last_error))]
    NoSitemapFound {
        host: String,
        attempts: usize,
        last_error: Option<SourceError>,
    },
}

impl ResolveError {
    /// User-correctable input problems, as opposed to upstream failures.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ResolveError::EmptyInput
                | ResolveError::InvalidUrl(_)
                | ResolveError::UnsupportedScheme(_)
        )
    }
}

fn describe_last(last: &Option<SourceError>) -> String {
    match last {
        Some(e) => format!("; last error: {e}"),
        None => String::new(),
    }
}

/// Failure of a request-level operation, classified for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// User-correctable input problem.
    #[error("{0}")]
    Input(String),

    /// Upstream or resolution failure.
    #[error("{0}")]
    Upstream(String),
}

impl From<ResolveError> for HandlerError {
    fn from(err: ResolveError) -> Self {
        if err.is_input_error() {
            HandlerError::Input(err.to_string())
        } else {
            HandlerError::Upstream(err.to_string())
        }
    }
}
