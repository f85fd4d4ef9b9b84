//! Inline transforms: links, bold, italic

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::placeholder::{PlaceholderKind, PlaceholderStore};
use crate::sanitize::LinkSanitizer;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]*)\)").expect("valid link regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static STAR_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic regex"));

/// Per-call state for the inline pass
pub(crate) struct InlineContext<'a> {
    pub sanitizer: LinkSanitizer,
    pub open_links_in_new_tab: bool,
    pub store: &'a mut PlaceholderStore,
}

impl InlineContext<'_> {
    /// Render one line of already-escaped text
    pub(crate) fn render(&mut self, text: &str) -> String {
        let text = self.render_links(text);
        render_emphasis(&text)
    }

    /// Replace links with placeholders so the emphasis pass never reaches into
    /// an href
    fn render_links(&mut self, text: &str) -> String {
        LINK.replace_all(text, |caps: &Captures| {
            let href = self.sanitizer.sanitize(caps[2].trim());
            let label = render_emphasis(&caps[1]);
            let extra = if self.open_links_in_new_tab {
                r#" target="_blank" rel="noopener""#
            } else {
                ""
            };
            let html = format!(r#"<a href="{href}"{extra}>{label}</a>"#);
            self.store.push(PlaceholderKind::Link, html)
        })
        .into_owned()
    }
}

/// Bold before italic so `**` is never read as two italic delimiters
pub(crate) fn render_emphasis(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = STAR_ITALIC.replace_all(&text, "<em>$1</em>");
    render_underscore_italic(&text)
}

/// `_x_` becomes `<em>x</em>` only at word boundaries
///
/// The opening `_` must follow start-of-text or a non-word character and the
/// closing `_` must precede a non-word character or end-of-text. Identifiers
/// such as `my_variable_name` and paths such as `/var/local_storage/data`
/// stay untouched.
fn render_underscore_italic(text: &str) -> String {
    if !text.contains('_') {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let closers = closing_underscores(&chars);
    let mut out = String::with_capacity(text.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let opens = chars[i] == '_' && (i == 0 || !is_word_char(chars[i - 1]));
        // At least one content character before the closer
        let close = if opens {
            closers.get(i + 2).copied().flatten()
        } else {
            None
        };
        if let Some(close) = close {
            out.push_str("<em>");
            out.extend(&chars[i + 1..close]);
            out.push_str("</em>");
            i = close + 1;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// For each position, the nearest `_` at or after it that is followed by a
/// non-word character or the end of the text
fn closing_underscores(chars: &[char]) -> Vec<Option<usize>> {
    let mut closers = vec![None; chars.len() + 1];
    for j in (0..chars.len()).rev() {
        let closes =
            chars[j] == '_' && chars.get(j + 1).is_none_or(|next| !is_word_char(*next));
        closers[j] = if closes { Some(j) } else { closers[j + 1] };
    }
    closers
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        let mut store = PlaceholderStore::new();
        let mut ctx = InlineContext {
            sanitizer: LinkSanitizer::default(),
            open_links_in_new_tab: false,
            store: &mut store,
        };
        let html = ctx.render(text);
        store.restore(&html)
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            render("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_underscore_italic_at_word_boundaries() {
        assert_eq!(render("_this_ works"), "<em>this</em> works");
        assert_eq!(render("(_aside_)"), "(<em>aside</em>)");
        assert_eq!(render("my_variable_name"), "my_variable_name");
        assert_eq!(
            render("/var/local_storage/data"),
            "/var/local_storage/data"
        );
        assert_eq!(render("snake_case and _em_"), "snake_case and <em>em</em>");
    }

    #[test]
    fn test_lone_underscores_stay_literal() {
        assert_eq!(render("_"), "_");
        assert_eq!(render("__"), "__");
        assert_eq!(render("a _ b"), "a _ b");
    }

    #[test]
    fn test_unclosed_underscores_on_a_long_line() {
        let line = " _a".repeat(100_000);
        let started = std::time::Instant::now();
        let html = render_underscore_italic(&line);

        assert_eq!(html, line);
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_bold_wrapping_underscore_italic() {
        assert_eq!(
            render("**_nested_**"),
            "<strong><em>nested</em></strong>"
        );
    }

    #[test]
    fn test_link_rendering() {
        assert_eq!(
            render("[WSO2](https://wso2.com)"),
            r#"<a href="https://wso2.com">WSO2</a>"#
        );
    }

    #[test]
    fn test_link_label_gets_emphasis() {
        assert_eq!(
            render("[**docs**](/docs)"),
            r#"<a href="/docs"><strong>docs</strong></a>"#
        );
    }

    #[test]
    fn test_emphasis_never_reaches_into_href() {
        assert_eq!(
            render("[x](/a*b*c) and [y](/d_e_)"),
            r#"<a href="/a*b*c">x</a> and <a href="/d_e_">y</a>"#
        );
    }

    #[test]
    fn test_unsafe_and_empty_hrefs_are_emptied() {
        assert_eq!(render("[x](javascript:alert(1))"), r#"<a href="">x</a>)"#);
        assert_eq!(render("[x]()"), r#"<a href="">x</a>"#);
    }

    #[test]
    fn test_new_tab_links() {
        let mut store = PlaceholderStore::new();
        let mut ctx = InlineContext {
            sanitizer: LinkSanitizer::default(),
            open_links_in_new_tab: true,
            store: &mut store,
        };
        let html = ctx.render("[a](/b)");
        assert_eq!(
            store.restore(&html),
            r#"<a href="/b" target="_blank" rel="noopener">a</a>"#
        );
    }
}
