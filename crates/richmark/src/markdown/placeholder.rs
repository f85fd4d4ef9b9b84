//! Placeholder extraction for spans that later passes must not touch
//!
//! Tokens are `U+E000 <kind> <index> U+E001`. Both sentinels are private-use
//! code points and are stripped from the input up front, so a token can only
//! ever come from [`PlaceholderStore::push`]. Sentinels are neither markup nor
//! word characters, which keeps tokens inert under the block and inline passes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}([FIL])(\d+)\x{E001}").expect("valid token regex"));

/// What a placeholder stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaceholderKind {
    /// Fenced code block, rendered as `<pre><code>`
    Fenced,
    /// Inline code span, rendered as `<code>`
    Inline,
    /// Fully rendered link
    Link,
}

impl PlaceholderKind {
    fn tag(self) -> char {
        match self {
            Self::Fenced => 'F',
            Self::Inline => 'I',
            Self::Link => 'L',
        }
    }
}

/// Call-local map from tokens to the HTML they stand for
#[derive(Debug, Default)]
pub(crate) struct PlaceholderStore {
    fenced: Vec<String>,
    inline: Vec<String>,
    links: Vec<String>,
}

impl PlaceholderStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store rendered HTML and return the token that replaces it
    pub(crate) fn push(&mut self, kind: PlaceholderKind, html: String) -> String {
        let slot = match kind {
            PlaceholderKind::Fenced => &mut self.fenced,
            PlaceholderKind::Inline => &mut self.inline,
            PlaceholderKind::Link => &mut self.links,
        };
        let token = format!("{OPEN}{}{}{CLOSE}", kind.tag(), slot.len());
        slot.push(html);
        token
    }

    /// Whether `text` is exactly one fenced code block token
    pub(crate) fn is_fenced_token(&self, text: &str) -> bool {
        TOKEN
            .captures(text)
            .is_some_and(|caps| caps[0].len() == text.len() && &caps[1] == "F")
    }

    /// Replace every token with its HTML
    ///
    /// Links may wrap inline code tokens, so restored content is restored again.
    pub(crate) fn restore(&self, text: &str) -> String {
        TOKEN
            .replace_all(text, |caps: &Captures| {
                let index: usize = caps[2].parse().unwrap_or(usize::MAX);
                let stored = match &caps[1] {
                    "F" => self.fenced.get(index),
                    "I" => self.inline.get(index),
                    _ => self.links.get(index),
                };
                match stored {
                    Some(html) => self.restore(html),
                    None => String::new(),
                }
            })
            .into_owned()
    }
}

/// Remove sentinel characters so user input can never forge a token
pub(crate) fn strip_sentinels(text: &str) -> Cow<'_, str> {
    if text.contains([OPEN, CLOSE]) {
        tracing::debug!("Stripping placeholder sentinels from markdown input");
        Cow::Owned(text.chars().filter(|c| *c != OPEN && *c != CLOSE).collect())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_restore() {
        let mut store = PlaceholderStore::new();
        let code = store.push(PlaceholderKind::Inline, "<code>x</code>".to_string());
        let block = store.push(PlaceholderKind::Fenced, "<pre><code>y</code></pre>".to_string());

        let text = format!("a {code} b {block}");
        assert_eq!(
            store.restore(&text),
            "a <code>x</code> b <pre><code>y</code></pre>"
        );
    }

    #[test]
    fn test_nested_restore() {
        let mut store = PlaceholderStore::new();
        let code = store.push(PlaceholderKind::Inline, "<code>*x*</code>".to_string());
        let link = store.push(
            PlaceholderKind::Link,
            format!("<a href=\"/a\">{code}</a>"),
        );

        assert_eq!(store.restore(&link), "<a href=\"/a\"><code>*x*</code></a>");
    }

    #[test]
    fn test_is_fenced_token() {
        let mut store = PlaceholderStore::new();
        let fenced = store.push(PlaceholderKind::Fenced, String::new());
        let inline = store.push(PlaceholderKind::Inline, String::new());

        assert!(store.is_fenced_token(&fenced));
        assert!(!store.is_fenced_token(&inline));
        assert!(!store.is_fenced_token(&format!("text {fenced}")));
    }

    #[test]
    fn test_strip_sentinels() {
        assert_eq!(strip_sentinels("plain"), "plain");
        assert_eq!(strip_sentinels("a\u{E000}F0\u{E001}b"), "aF0b");
    }
}
