//! Layered configuration for the CLI.
//!
//! Produces the library's [`ConvertOptions`](richmark::ConvertOptions).
//! Priority: flags > `RICHMARK_*` environment > `richmark.toml` > defaults
//!
//! ```toml
//! # richmark.toml
//! max_heading_level = 4
//! open_links_in_new_tab = true
//! allowed_schemes = ["http", "https", "mailto", "tel"]
//! ```

mod loading;
mod validation;

pub use loading::{CONFIG_FILE_NAME, ConfigOverrides, ENV_PREFIX, load};
pub use validation::validate;
