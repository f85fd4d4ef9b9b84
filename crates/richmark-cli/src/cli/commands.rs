use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Richmark subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render Markdown as sanitized HTML
    ///
    /// Supports headings, bold, italic, inline and fenced code, ordered and
    /// unordered lists, links and thematic breaks.
    ToHtml(ConvertArgs),

    /// Convert HTML back to Markdown
    ///
    /// Scripts, styles, embeds and form controls are dropped with their
    /// content; unknown wrappers are unwrapped.
    ToMarkdown(ConvertArgs),

    /// Wrap code in an escaped <pre><code> block
    CodeBlock(CodeBlockArgs),

    /// Print each link target after the scheme allow-list
    ///
    /// Blocked targets print as an empty line.
    SanitizeHref(SanitizeHrefArgs),

    /// Print the toolbar label and variant for a block tag
    BlockDisplay(BlockDisplayArgs),
}

/// Arguments shared by `to-html` and `to-markdown`
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Input file (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Deepest heading level to recognize (1-6)
    #[arg(long, value_name = "LEVEL")]
    pub max_heading_level: Option<u8>,

    /// Add target="_blank" rel="noopener" to rendered links
    #[arg(long)]
    pub new_tab: bool,

    /// Allowed link scheme, replaces the configured list (repeatable)
    #[arg(long = "allow-scheme", value_name = "SCHEME")]
    pub allow_schemes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CodeBlockArgs {
    /// File with the code (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SanitizeHrefArgs {
    /// Link targets to check
    #[arg(required = true, value_name = "HREF")]
    pub hrefs: Vec<String>,

    /// Allowed link scheme, replaces the configured list (repeatable)
    #[arg(long = "allow-scheme", value_name = "SCHEME")]
    pub allow_schemes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct BlockDisplayArgs {
    /// Block tag name (h1, p, subtitle1, ...)
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}
