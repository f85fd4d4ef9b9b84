//! Logging setup for the CLI.
//!
//! Logs go to stderr so converted output on stdout stays pipeable.
//!
//! # Example
//!
//! ```rust,no_run
//! use richmark_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Converting");
//! debug!(input = "notes.md", "Reading input");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) const VERBOSE_FILTER: &str = "richmark=debug,richmark_cli=debug";
pub(crate) const QUIET_FILTER: &str = "richmark=error,richmark_cli=error";
pub(crate) const DEFAULT_FILTER: &str = "richmark=info,richmark_cli=info";

/// Initialize the tracing subscriber.
///
/// Level selection, first match wins:
/// 1. `--verbose`: DEBUG for richmark crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for richmark crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether stderr should get ANSI colors.
///
/// `NO_COLOR` disables, `FORCE_COLOR` forces, otherwise terminal detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_filters_parse() {
        for directives in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    #[serial]
    fn test_no_color_wins_over_force_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_colors());

        unsafe {
            std::env::remove_var("NO_COLOR");
        }
        assert!(should_use_colors());

        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
