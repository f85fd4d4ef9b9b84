//! Command implementations.
//!
//! - [`convert`] - `to-html`, `to-markdown` and `code-block`
//! - [`href`] - `sanitize-href`
//! - [`display`] - `block-display`
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod convert;
pub mod display;
pub mod href;
pub(crate) mod utils;

pub use convert::{
    code_block_execute, execute_to_html as to_html_execute,
    execute_to_markdown as to_markdown_execute,
};
pub use display::execute as block_display_execute;
pub use href::execute as sanitize_href_execute;
