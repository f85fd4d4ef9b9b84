//! # richmark
//!
//! Markdown and sanitized HTML conversion for a rich-text editor field.
//!
//! The editor loads markdown with [`markdown_to_html`] and saves with
//! [`html_to_markdown`]. Both are pure functions over strings: they never fail
//! and never emit executable content. Unsafe links are emptied, raw HTML typed
//! as markdown is escaped and disallowed elements pasted as HTML are dropped.
//!
//! The [`editor`] module holds the toolbar operations (lists, inline and block
//! formatting, alignment, indentation, HTML insertion) expressed over the
//! [`editor::EditorHost`] trait, with [`editor::EditorDocument`] as the
//! in-memory host.

pub mod display;
pub mod editor;
pub mod error;
pub mod escape;
pub mod html;
pub mod markdown;
pub mod options;
pub mod sanitize;

// Re-export public types
pub use display::{BlockDisplay, block_display};
pub use editor::create_code_block_html;
pub use error::{EditorError, Result};
pub use escape::escape_html;
pub use html::{html_to_markdown, html_to_markdown_with_options};
pub use markdown::{markdown_to_html, markdown_to_html_with_options};
pub use options::ConvertOptions;
pub use sanitize::{DEFAULT_ALLOWED_SCHEMES, LinkSanitizer, sanitize_href};
