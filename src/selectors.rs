//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// `<meta property="og:image">`
pub static OG_IMAGE_PROPERTY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[property="og:image"]"#).expect("valid og:image selector")
});

/// `<meta property="og:image:url">`
pub static OG_IMAGE_URL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[property="og:image:url"]"#).expect("valid og:image:url selector")
});

/// `<meta name="og:image">`, a common misspelling of the property form.
pub static OG_IMAGE_NAME_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="og:image"]"#).expect("valid og:image name selector")
});

/// Image meta tag variants in lookup priority order.
pub static OG_IMAGE_SELECTORS: Lazy<[&'static Selector; 3]> = Lazy::new(|| {
    [
        &*OG_IMAGE_PROPERTY_SELECTOR,
        &*OG_IMAGE_URL_SELECTOR,
        &*OG_IMAGE_NAME_SELECTOR,
    ]
});
