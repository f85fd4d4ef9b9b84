//! HTML to markdown conversion
//!
//! Input is parsed with a standards-compliant HTML5 parser, so malformed or pasted
//! markup is normalized the same way a browser would before it is walked.
//! Attributes never reach the output except a sanitized `href`.

pub mod dom;
mod walker;

use std::sync::LazyLock;

use regex::Regex;

use crate::options::ConvertOptions;
use dom::Fragment;
use walker::MarkdownWalker;

static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line regex"));

const FENCE: &str = "```";

/// Convert HTML to markdown with default options
///
/// ```rust
/// use richmark::html_to_markdown;
///
/// let md = html_to_markdown("<h2>Title</h2><p>Some <strong>bold</strong> text</p>");
/// assert_eq!(md, "## Title\n\nSome **bold** text");
/// ```
pub fn html_to_markdown(html: &str) -> String {
    html_to_markdown_with_options(html, &ConvertOptions::default())
}

/// Convert HTML to markdown
///
/// Never fails. Disallowed elements are dropped with their content, unknown
/// elements are unwrapped to their children.
pub fn html_to_markdown_with_options(html: &str, options: &ConvertOptions) -> String {
    let fragment = Fragment::parse(html);
    let walker = MarkdownWalker {
        max_heading_level: options.heading_level(),
        sanitizer: options.link_sanitizer(),
    };
    let markdown = walker.children(&fragment.children);
    collapse_blank_lines(&markdown).trim().to_string()
}

/// Collapse runs of blank lines outside fenced code
fn collapse_blank_lines(markdown: &str) -> String {
    markdown
        .split(FENCE)
        .enumerate()
        .map(|(index, segment)| {
            if index % 2 == 0 {
                EXTRA_BLANK_LINES.replace_all(segment, "\n\n").into_owned()
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(FENCE)
}
