//! Tests

#[cfg(test)]
mod tests {
    use crate::api::*;
    use crate::config::Settings;
    use crate::error::HandlerError;
    use crate::tools::fetch::stub::StubFetcher;
    use serde_json::json;
    use std::sync::Arc;

    fn components(fetcher: StubFetcher) -> Components {
        Components::with_fetcher(Arc::new(fetcher), Settings::default())
    }

    fn urlset(locs: &[String]) -> String {
        let entries: String = locs
            .iter()
            .map(|l| format!("<url><loc>{l}</loc></url>"))
            .collect();
        format!("<urlset>{entries}</urlset>")
    }

    #[test]
    fn test_batch_limit_clamping() {
        let settings = Settings::default();
        assert_eq!(batch_limit(Some(&json!(0)), &settings), 1);
        assert_eq!(batch_limit(Some(&json!(10000)), &settings), 200);
        assert_eq!(batch_limit(Some(&json!("abc")), &settings), 50);
        assert_eq!(batch_limit(None, &settings), 50);
    }

    #[test]
    fn test_batch_limit_parsing() {
        let settings = Settings::default();
        assert_eq!(batch_limit(Some(&json!(25)), &settings), 25);
        assert_eq!(batch_limit(Some(&json!(7.9)), &settings), 7);
        assert_eq!(batch_limit(Some(&json!(-5)), &settings), 1);
        assert_eq!(batch_limit(Some(&json!("12")), &settings), 12);
        assert_eq!(batch_limit(Some(&json!("  12abc")), &settings), 12);
        assert_eq!(batch_limit(Some(&json!("-3")), &settings), 1);
        assert_eq!(batch_limit(Some(&json!("99999999999999999999999")), &settings), 200);
        assert_eq!(batch_limit(Some(&json!("")), &settings), 50);
        assert_eq!(batch_limit(Some(&json!(null)), &settings), 50);
        assert_eq!(batch_limit(Some(&json!(true)), &settings), 50);
    }

    #[test]
    fn test_sanitize_urls() {
        let body = json!({ "urls": ["a", "", "  ", "b"] });
        assert_eq!(sanitize_urls(body.get("urls")), ["a", "b"]);

        let body = json!({ "urls": [" https://example.com/x ", 42, null, {"url": "y"}] });
        assert_eq!(sanitize_urls(body.get("urls")), ["https://example.com/x"]);

        assert!(sanitize_urls(None).is_empty());
        assert!(sanitize_urls(Some(&json!("https://example.com"))).is_empty());
        assert!(sanitize_urls(Some(&json!({}))).is_empty());
    }

    #[test]
    fn test_domain_input() {
        assert_eq!(domain_input(&json!({ "domain": "a.com", "input": "b.com" })), Some("a.com"));
        assert_eq!(domain_input(&json!({ "input": "b.com" })), Some("b.com"));
        assert_eq!(domain_input(&json!({ "domain": "  ", "input": "b.com" })), Some("b.com"));
        assert_eq!(domain_input(&json!({ "domain": 5 })), None);
        assert_eq!(domain_input(&json!({})), None);
        assert_eq!(domain_input(&json!(null)), None);
    }

    #[tokio::test]
    async fn test_resolve_and_extract_scenario() {
        let pages: Vec<String> = (1..=3).map(|i| format!("https://example.com/p{i}")).collect();
        let fetcher = pages
            .iter()
            .fold(StubFetcher::new(), |f, url| f.with_page(url, "<html><head></head></html>"))
            .with_page("https://example.com/sitemap.xml", &urlset(&pages));

        let report = resolve_and_extract(&components(fetcher), "example.com")
            .await
            .unwrap();

        assert_eq!(report.domain, "example.com");
        assert_eq!(report.sitemap_url, "https://example.com/sitemap.xml");
        assert_eq!(report.total, 3);
        assert_eq!(report.batch.processed, 3);
        assert_eq!(report.batch.found, 0);
        assert_eq!(report.batch.not_found, 3);
        assert_eq!(report.batch.unprocessed, 0);
    }

    #[tokio::test]
    async fn test_resolve_and_extract_applies_sitemap_limit() {
        let pages: Vec<String> = (0..120).map(|i| format!("https://example.com/p{i}")).collect();
        let fetcher = StubFetcher::new().with_page("https://example.com/sitemap.xml", &urlset(&pages));

        let report = resolve_and_extract(&components(fetcher), "example.com")
            .await
            .unwrap();

        assert_eq!(report.total, 120);
        assert_eq!(report.batch.processed, 50);
        assert_eq!(report.batch.unprocessed, 70);
        assert_eq!(report.batch.processed + report.batch.unprocessed, report.total);
        assert_eq!(report.batch.found + report.batch.not_found, report.batch.processed);
        assert_eq!(report.batch.unprocessed_pages[0], "https://example.com/p50");
    }

    #[tokio::test]
    async fn test_resolve_and_extract_errors() {
        let err = resolve_and_extract(&components(StubFetcher::new()), "")
            .await
            .unwrap_err();
        assert_eq!(err, HandlerError::Input("Domain is required".into()));

        let err = resolve_and_extract(&components(StubFetcher::new()), "example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::Upstream(ref m) if m.contains("No sitemap found")));
    }

    #[tokio::test]
    async fn test_extract_given_list_scenario() {
        let body = json!({ "urls": ["a", "", "  ", "b"], "limit": 1 });
        let settings = Settings::default();
        let urls = sanitize_urls(body.get("urls"));
        let limit = batch_limit(body.get("limit"), &settings);

        let report = extract_given_list(&components(StubFetcher::new()), urls, limit)
            .await
            .unwrap();

        assert_eq!(report.processed, 1);
        assert_eq!(report.unprocessed, 1);
        assert_eq!(report.unprocessed_pages, ["b"]);
        assert_eq!(report.pages_without_images[0].url, "a");
    }

    #[tokio::test]
    async fn test_extract_given_list_requires_urls() {
        let err = extract_given_list(&components(StubFetcher::new()), Vec::new(), 10)
            .await
            .unwrap_err();
        assert_eq!(err, HandlerError::Input(URLS_REQUIRED.into()));
    }

    #[tokio::test]
    async fn test_resolve_only() {
        let pages = vec!["https://example.com/".to_string()];
        let fetcher = StubFetcher::new().with_page("https://example.com/sitemap.xml", &urlset(&pages));

        let summary = resolve_only(&components(fetcher), "https://example.com")
            .await
            .unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.urls, pages);
        assert_eq!(
            serde_json::to_value(&summary).unwrap()["sitemapUrl"],
            "https://example.com/sitemap.xml"
        );
    }
}
