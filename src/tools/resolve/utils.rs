use crate::error::ResolveError;
use url::Url;

const HTTPS: &str = "https";
const HTTP: &str = "http";

/// Well-known sitemap paths, in trial order.
const WELL_KNOWN_PATHS: [&str; 2] = ["/sitemap.xml", "/sitemap_index.xml"];

/// Turn loose user input (`example.com`, `https://example.com/`, a sitemap URL) into an absolute URL.
pub(super) fn normalize_input(input: &str) -> Result<Url, ResolveError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::EmptyInput);
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{HTTPS}://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|e| ResolveError::InvalidUrl(format!("{trimmed}: {e}")))?;

    if !matches!(url.scheme(), HTTP | HTTPS) {
        return Err(ResolveError::UnsupportedScheme(url.scheme().to_string()));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ResolveError::InvalidUrl(format!("{trimmed}: missing host")));
    }

    Ok(url)
}

/// `scheme://` prefix with an RFC 3986 scheme.
fn has_scheme(input: &str) -> bool {
    match input.find("://") {
        Some(idx) if idx > 0 => {
            let scheme = &input[..idx];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Host plus explicit port (`example.com`, `localhost:8080`).
pub(super) fn host_with_port(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Whether the path points at a sitemap document rather than a site root.
pub(super) fn looks_like_sitemap(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    if path.is_empty() || path == "/" {
        return false;
    }
    path.contains("sitemap") || path.ends_with(".xml") || path.ends_with(".xml.gz")
}

fn alternate_scheme(scheme: &str) -> &'static str {
    if scheme == HTTPS {
        HTTP
    } else {
        HTTPS
    }
}

/// Candidate sitemap locations in trial order, without duplicates.
pub(super) fn sitemap_candidates(url: &Url) -> Vec<String> {
    let own = if url.scheme() == HTTP { HTTP } else { HTTPS };
    let other = alternate_scheme(own);
    let host = host_with_port(url);
    let mut candidates = Vec::new();

    if looks_like_sitemap(url) {
        candidates.push(url.to_string());
        let mut swapped = url.clone();
        if swapped.set_scheme(other).is_ok() {
            candidates.push(swapped.to_string());
        }
    }

    for scheme in [own, other] {
        for path in WELL_KNOWN_PATHS {
            candidates.push(format!("{scheme}://{host}{path}"));
        }
    }

    crate::dedupe!(candidates)
}
