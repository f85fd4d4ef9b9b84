//! Link sanitization shared by both conversion directions
//!
//! Only hrefs with an allow-listed scheme, or no scheme at all (relative
//! references, anchors, protocol-relative URLs), are kept. Everything else is
//! neutralized to an empty string. The check never fails; it always returns a
//! string.
//!
//! # Example
//!
//! ```rust
//! use richmark::sanitize_href;
//!
//! assert_eq!(sanitize_href("https://example.com"), "https://example.com");
//! assert_eq!(sanitize_href("JAVASCRIPT:alert(1)"), "");
//! assert_eq!(sanitize_href("/docs/intro"), "/docs/intro");
//! ```

use crate::escape::unescape_html;

/// Schemes allowed when no explicit list is configured
pub const DEFAULT_ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Scheme allow-list check for link targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSanitizer {
    allowed_schemes: Vec<String>,
}

impl Default for LinkSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_SCHEMES.iter().copied())
    }
}

impl LinkSanitizer {
    /// Create a sanitizer allowing the given schemes (case-insensitive, with or
    /// without a trailing `:`)
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_schemes = schemes
            .into_iter()
            .map(|s| s.as_ref().trim().trim_end_matches(':').to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { allowed_schemes }
    }

    /// Configured schemes, lowercased and without the trailing `:`
    pub fn allowed_schemes(&self) -> &[String] {
        &self.allowed_schemes
    }

    /// Whether the href is safe to emit
    pub fn is_allowed(&self, raw: &str) -> bool {
        // The markdown pass hands over HTML-escaped text
        let decoded = unescape_html(raw);
        let normalized = normalize(&decoded);

        match scheme_of(&normalized) {
            None => true,
            Some(scheme) => self
                .allowed_schemes
                .iter()
                .any(|allowed| allowed.as_str() == scheme),
        }
    }

    /// Return `raw` unchanged if allowed, otherwise an empty string
    pub fn sanitize(&self, raw: &str) -> String {
        if self.is_allowed(raw) {
            raw.to_string()
        } else {
            tracing::warn!(href = raw, "Neutralized link with disallowed scheme");
            String::new()
        }
    }
}

/// Sanitize an href against the default scheme allow-list
pub fn sanitize_href(raw: &str) -> String {
    LinkSanitizer::default().sanitize(raw)
}

/// Mirror what browsers do before parsing a URL: drop tab/newline anywhere and
/// strip leading/trailing C0 controls and spaces.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect::<String>()
        .trim_matches(|c: char| c <= ' ')
        .to_string()
}

/// Extract the lowercased scheme, or `None` for scheme-less references
fn scheme_of(url: &str) -> Option<String> {
    let colon = url.find(':')?;

    // A '/', '?' or '#' before the colon means the colon belongs to the path
    if url[..colon].contains(['/', '?', '#']) {
        return None;
    }

    let candidate = &url[..colon];
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        // "a b:c" or ":foo" is not a scheme; browsers resolve it relatively
        _ => return None,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }

    Some(candidate.to_ascii_lowercase())
}
