//! Conversion options

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::sanitize::{DEFAULT_ALLOWED_SCHEMES, LinkSanitizer};

/// Options shared by both conversion directions
///
/// Deserializable so front ends can load it straight from a config file.
///
/// ```rust
/// use richmark::ConvertOptions;
///
/// let options = ConvertOptions::builder()
///     .open_links_in_new_tab(true)
///     .allowed_schemes(vec!["https".to_string(), "tel".to_string()])
///     .build();
/// assert_eq!(options.max_heading_level, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Deepest heading level recognized in either direction (clamped to 1..=6)
    #[builder(default = 3)]
    pub max_heading_level: u8,

    /// Add `target="_blank" rel="noopener"` to rendered links
    #[builder(default)]
    pub open_links_in_new_tab: bool,

    /// Link schemes kept by the sanitizer; scheme-less hrefs are always kept
    #[builder(default = default_allowed_schemes())]
    pub allowed_schemes: Vec<String>,
}

fn default_allowed_schemes() -> Vec<String> {
    DEFAULT_ALLOWED_SCHEMES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading level clamped to what HTML supports
    pub fn heading_level(&self) -> u8 {
        self.max_heading_level.clamp(1, 6)
    }

    /// Sanitizer built from `allowed_schemes`
    pub fn link_sanitizer(&self) -> LinkSanitizer {
        LinkSanitizer::new(&self.allowed_schemes)
    }
}
