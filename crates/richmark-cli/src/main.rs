//! Richmark CLI - editor Markdown to sanitized HTML and back.
//!
//! Parses arguments, sets up logging, then dispatches to the command.

use clap::Parser;
use miette::Result;
use richmark_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let config = args.config.as_deref();
    let result = match args.command {
        cli::Command::ToHtml(convert_args) => commands::to_html_execute(convert_args, config).await,
        cli::Command::ToMarkdown(convert_args) => {
            commands::to_markdown_execute(convert_args, config).await
        }
        cli::Command::CodeBlock(code_args) => commands::code_block_execute(code_args).await,
        cli::Command::SanitizeHref(href_args) => {
            commands::sanitize_href_execute(href_args, config).await
        }
        cli::Command::BlockDisplay(display_args) => {
            commands::block_display_execute(display_args).await
        }
    };

    result.map_err(error::cli_error_to_miette)
}
