//! Richmark CLI - convert between the editor's Markdown dialect and sanitized HTML.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - one `execute` function per subcommand
//! - [`config`] - `richmark.toml` / environment / flag layering
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use richmark_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
