//! Markdown to HTML conversion
//!
//! The pipeline runs in a fixed order:
//!
//! 1. fenced code blocks and inline code spans are pulled out into placeholders
//! 2. the remaining text is HTML-escaped
//! 3. lines are grouped into headings, lists, rules and paragraphs
//! 4. links, bold and italic are rendered inside each block
//! 5. placeholders are restored verbatim
//!
//! Code content is escaped exactly once in step 1 and never sees steps 2-4.

mod block;
mod inline;
mod placeholder;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;
use crate::options::ConvertOptions;
use block::{parse_blocks, render_blocks};
use inline::InlineContext;
use placeholder::{PlaceholderKind, PlaceholderStore, strip_sentinels};

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n?(.*?)```").expect("valid fence regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("valid inline code regex"));

/// Convert markdown to HTML with default options
///
/// ```rust
/// use richmark::markdown_to_html;
///
/// assert_eq!(markdown_to_html("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
/// assert_eq!(markdown_to_html("`**x**`"), "<p><code>**x**</code></p>");
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_options(markdown, &ConvertOptions::default())
}

/// Convert markdown to HTML
///
/// Never fails. Raw HTML in the input is escaped, disallowed link schemes are
/// emptied.
pub fn markdown_to_html_with_options(markdown: &str, options: &ConvertOptions) -> String {
    let markdown = strip_sentinels(markdown);
    let markdown = markdown.replace("\r\n", "\n");
    let mut store = PlaceholderStore::new();

    let text = FENCED_CODE.replace_all(&markdown, |caps: &Captures| {
        let html = format!("<pre><code>{}</code></pre>", escape_html(&caps[2]));
        store.push(PlaceholderKind::Fenced, html)
    });
    let text = INLINE_CODE.replace_all(&text, |caps: &Captures| {
        let html = format!("<code>{}</code>", escape_html(&caps[1]));
        store.push(PlaceholderKind::Inline, html)
    });
    let text = escape_html(&text);

    let blocks = parse_blocks(&text, options.heading_level(), &store);
    tracing::debug!(blocks = blocks.len(), "Parsed markdown blocks");

    let mut ctx = InlineContext {
        sanitizer: options.link_sanitizer(),
        open_links_in_new_tab: options.open_links_in_new_tab,
        store: &mut store,
    };
    let html = render_blocks(&blocks, &mut ctx);

    store.restore(&html)
}
