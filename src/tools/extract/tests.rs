#[cfg(test)]
mod tests {
    use crate::tools::extract::*;
    use crate::tools::fetch::stub::StubFetcher;

    #[test]
    fn test_og_image_property() {
        let html = r#"<html><head>
            <meta property="og:title" content="Title">
            <meta property="og:image" content="https://cdn.example.com/hero.jpg">
        </head><body></body></html>"#;
        assert_eq!(
            extract_og_image(html),
            Some("https://cdn.example.com/hero.jpg".to_string())
        );
    }

    #[test]
    fn test_og_image_priority() {
        // Document order must not matter; property="og:image" outranks the others.
        let html = r#"<head>
            <meta name="og:image" content="https://example.com/name.png">
            <meta property="og:image:url" content="https://example.com/url.png">
            <meta property="og:image" content="https://example.com/property.png">
        </head>"#;
        assert_eq!(
            extract_og_image(html).as_deref(),
            Some("https://example.com/property.png")
        );

        let html = r#"<head>
            <meta name="og:image" content="https://example.com/name.png">
            <meta property="og:image:url" content="https://example.com/url.png">
        </head>"#;
        assert_eq!(extract_og_image(html).as_deref(), Some("https://example.com/url.png"));

        let html = r#"<head><meta name="og:image" content="https://example.com/name.png"></head>"#;
        assert_eq!(extract_og_image(html).as_deref(), Some("https://example.com/name.png"));
    }

    #[test]
    fn test_og_image_empty_falls_through() {
        let html = r#"<head>
            <meta property="og:image" content="   ">
            <meta property="og:image:url" content="https://example.com/fallback.png">
        </head>"#;
        assert_eq!(
            extract_og_image(html).as_deref(),
            Some("https://example.com/fallback.png")
        );
    }

    #[test]
    fn test_og_image_first_tag_per_variant() {
        let html = r#"<head>
            <meta property="og:image" content="https://example.com/first.png">
            <meta property="og:image" content="https://example.com/second.png">
        </head>"#;
        assert_eq!(extract_og_image(html).as_deref(), Some("https://example.com/first.png"));
    }

    #[test]
    fn test_og_image_trimmed() {
        let html = r#"<meta property="og:image" content="  https://example.com/a.png
        ">"#;
        assert_eq!(extract_og_image(html).as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_og_image_absent() {
        assert_eq!(extract_og_image(""), None);
        assert_eq!(extract_og_image("<html><head><title>x</title></head></html>"), None);
        assert_eq!(
            extract_og_image(r#"<meta name="twitter:image" content="https://example.com/t.png">"#),
            None
        );
        assert_eq!(extract_og_image(r#"<meta property="og:image">"#), None);
    }

    #[test]
    fn test_og_image_garbage_input() {
        assert_eq!(extract_og_image("<<<>>> not html </meta"), None);
        assert_eq!(extract_og_image("{\"json\": true}"), None);
    }

    #[tokio::test]
    async fn test_extract_page_found() {
        let fetcher = StubFetcher::new().with_page(
            "https://example.com/a",
            r#"<meta property="og:image" content="https://example.com/a.png">"#,
        );

        let result = extract_page(&fetcher, "https://example.com/a").await;
        assert_eq!(
            result,
            PageResult::new("https://example.com/a", Some("https://example.com/a.png".into()))
        );
        assert!(result.has_image());
    }

    #[tokio::test]
    async fn test_extract_page_fetch_failure_is_null() {
        let fetcher = StubFetcher::new().with_status("https://example.com/gone", 404);

        let result = extract_page(&fetcher, "https://example.com/gone").await;
        assert_eq!(result.url, "https://example.com/gone");
        assert_eq!(result.og_image, None);

        let result = extract_page(&fetcher, "https://unknown.test/").await;
        assert_eq!(result.og_image, None);
    }

    #[test]
    fn test_page_result_json_shape() {
        let json = serde_json::to_value(PageResult::new("https://example.com/", None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "url": "https://example.com/", "ogImage": null })
        );
    }
}
