//! `to-html`, `to-markdown` and `code-block`.

use std::path::Path;

use richmark::{ConvertOptions, create_code_block_html};
use tracing::info;

use crate::cli::{CodeBlockArgs, ConvertArgs};
use crate::commands::utils;
use crate::config::{self, ConfigOverrides};
use crate::error::Result;

/// Render Markdown input as sanitized HTML.
pub async fn execute_to_html(args: ConvertArgs, config_path: Option<&Path>) -> Result<()> {
    let options = load_options(&args, config_path)?;
    let markdown = utils::read_input(args.input.as_deref()).await?;

    let html = richmark::markdown_to_html_with_options(&markdown, &options);
    info!(
        input_len = markdown.len(),
        output_len = html.len(),
        "Converted Markdown to HTML"
    );

    utils::write_output(args.output.as_deref(), &html).await
}

/// Convert HTML input back to Markdown.
pub async fn execute_to_markdown(args: ConvertArgs, config_path: Option<&Path>) -> Result<()> {
    let options = load_options(&args, config_path)?;
    let html = utils::read_input(args.input.as_deref()).await?;

    let markdown = richmark::html_to_markdown_with_options(&html, &options);
    info!(
        input_len = html.len(),
        output_len = markdown.len(),
        "Converted HTML to Markdown"
    );

    utils::write_output(args.output.as_deref(), &markdown).await
}

/// Wrap the input verbatim in an escaped `<pre><code>` block.
pub async fn code_block_execute(args: CodeBlockArgs) -> Result<()> {
    let code = utils::read_input(args.input.as_deref()).await?;
    // stdin usually ends with the shell's newline
    let code = code.strip_suffix('\n').unwrap_or(&code);
    utils::write_output(args.output.as_deref(), &create_code_block_html(code)).await
}

fn load_options(args: &ConvertArgs, config_path: Option<&Path>) -> Result<ConvertOptions> {
    let cwd = utils::get_cwd()?;
    let overrides = ConfigOverrides::from_convert_args(args);
    Ok(config::load(config_path, &cwd, &overrides)?)
}
