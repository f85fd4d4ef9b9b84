//! `sanitize-href`.

use std::path::Path;

use crate::cli::SanitizeHrefArgs;
use crate::commands::utils;
use crate::config::{self, ConfigOverrides};
use crate::error::Result;
use crate::ui;

/// Print each href as the converters would emit it, one per line.
///
/// Blocked hrefs print as empty lines so output lines up with the arguments.
pub async fn execute(args: SanitizeHrefArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let options = config::load(
        config_path,
        &cwd,
        &ConfigOverrides::from_schemes(&args.allow_schemes),
    )?;
    let sanitizer = options.link_sanitizer();

    let lines: Vec<String> = args
        .hrefs
        .iter()
        .map(|href| sanitizer.sanitize(href))
        .collect();

    let blocked = args
        .hrefs
        .iter()
        .zip(&lines)
        .filter(|(href, sanitized)| !href.trim().is_empty() && sanitized.is_empty())
        .count();
    if blocked > 0 {
        ui::warning(&format!(
            "{blocked} of {} hrefs blocked by the scheme allow-list",
            lines.len()
        ));
    }

    utils::write_output(None, &lines.join("\n")).await
}
