//! Status messages on stderr.
//!
//! ```no_run
//! use richmark_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Wrote notes.html");
//! ui::warning("Link scheme not allowed");
//! ```

use console::style;

/// Turn colors off for `console` when `--no-color` is given or the
/// environment asks for it.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && crate::logger::should_use_colors();
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}
