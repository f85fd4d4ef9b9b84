use richmark::ConvertOptions;

use crate::error::ConfigError;

/// Reject values the library would otherwise clamp or silently ignore.
pub fn validate(options: &ConvertOptions) -> Result<(), ConfigError> {
    if !(1..=6).contains(&options.max_heading_level) {
        return Err(ConfigError::InvalidValue {
            field: "max_heading_level".to_string(),
            value: options.max_heading_level.to_string(),
            hint: "Use a heading level from 1 to 6".to_string(),
        });
    }

    if let Some(scheme) = options
        .allowed_schemes
        .iter()
        .find(|scheme| !is_valid_scheme(scheme))
    {
        return Err(ConfigError::InvalidValue {
            field: "allowed_schemes".to_string(),
            value: format!("{scheme:?}"),
            hint: "A scheme starts with a letter followed by letters, digits, '+', '-' or '.', \
                   e.g. \"https\" or \"tel:\""
                .to_string(),
        });
    }

    Ok(())
}

fn is_valid_scheme(scheme: &str) -> bool {
    let scheme = scheme.strip_suffix(':').unwrap_or(scheme);
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
