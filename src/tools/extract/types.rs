use serde::{Deserialize, Serialize};

/// Image lookup outcome for one page. `og_image` is `None` when the page had no usable tag or
/// could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub url: String,
    pub og_image: Option<String>,
}

impl PageResult {
    pub fn new(url: impl Into<String>, og_image: Option<String>) -> Self {
        Self {
            url: url.into(),
            og_image,
        }
    }

    pub fn has_image(&self) -> bool {
        self.og_image.is_some()
    }
}
