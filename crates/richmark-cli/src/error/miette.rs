//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => {
            miette::miette!(
                "File not found: {}\n\nHint: Pass an existing file or pipe input on stdin",
                path.display()
            )
        }
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::InvalidValue { field, value, hint } => {
            miette::miette!(
                "Configuration error: invalid value for '{}': {}\n\nHint: {}",
                field,
                value,
                hint
            )
        }
        _ => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_not_found_report_has_hint() {
        let report = cli_error_to_miette(CliError::FileNotFound(PathBuf::from("in.md")));
        let msg = report.to_string();
        assert!(msg.contains("in.md"));
        assert!(msg.contains("stdin"));
    }

    #[test]
    fn test_config_report() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::InvalidValue {
            field: "allowed_schemes".to_string(),
            value: "java script".to_string(),
            hint: "Schemes are letters, digits, '+', '-' or '.'".to_string(),
        }));
        assert!(report.to_string().starts_with("Configuration error"));
    }
}
