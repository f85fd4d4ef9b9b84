//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `richmark to-html` - Markdown to sanitized HTML
//! - `richmark to-markdown` - HTML to Markdown
//! - `richmark code-block` - wrap text in an escaped `<pre><code>` block
//! - `richmark sanitize-href` - check link targets against the scheme allow-list
//! - `richmark block-display` - toolbar label for a block tag

mod commands;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{BlockDisplayArgs, CodeBlockArgs, Command, ConvertArgs, SanitizeHrefArgs};

/// Richmark - Markdown and sanitized HTML for rich-text editor fields
#[derive(Parser, Debug)]
#[command(
    name = "richmark",
    version,
    about = "Convert between editor Markdown and sanitized HTML",
    long_about = "Richmark converts the constrained Markdown dialect used by rich-text\n\
                  editor fields to HTML built from a small safe tag set, and back.\n\
                  Link targets are checked against a scheme allow-list in both directions."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Logs dropped elements and neutralized links as they are encountered.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of ./richmark.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
