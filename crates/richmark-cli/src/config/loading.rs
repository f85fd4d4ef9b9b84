use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use richmark::ConvertOptions;
use serde::Serialize;
use tracing::debug;

use crate::cli::ConvertArgs;
use crate::config::validate;
use crate::error::ConfigError;

/// Config file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "richmark.toml";

/// Prefix for environment overrides (`RICHMARK_MAX_HEADING_LEVEL=4`)
pub const ENV_PREFIX: &str = "RICHMARK_";

/// Values given on the command line; unset fields leave lower layers alone
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heading_level: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_links_in_new_tab: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_schemes: Option<Vec<String>>,
}

impl ConfigOverrides {
    pub fn from_convert_args(args: &ConvertArgs) -> Self {
        Self {
            max_heading_level: args.max_heading_level,
            // a bare switch can only turn the option on
            open_links_in_new_tab: args.new_tab.then_some(true),
            allowed_schemes: Self::schemes(&args.allow_schemes),
        }
    }

    pub fn from_schemes(schemes: &[String]) -> Self {
        Self {
            allowed_schemes: Self::schemes(schemes),
            ..Self::default()
        }
    }

    fn schemes(schemes: &[String]) -> Option<Vec<String>> {
        (!schemes.is_empty()).then(|| schemes.to_vec())
    }
}

/// Load conversion options from every source.
///
/// An explicit `config_path` must exist; otherwise `richmark.toml` in `cwd`
/// is used when present.
pub fn load(
    config_path: Option<&Path>,
    cwd: &Path,
    overrides: &ConfigOverrides,
) -> Result<ConvertOptions, ConfigError> {
    let mut figment = Figment::new().merge(Serialized::defaults(ConvertOptions::default()));

    let config_file = match config_path {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default_path = cwd.join(CONFIG_FILE_NAME);
            default_path.exists().then_some(default_path)
        }
    };

    if let Some(path) = config_file {
        debug!(path = %path.display(), "Loading config file");
        figment = figment.merge(Toml::file(path));
    }

    figment = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides));

    let options: ConvertOptions = figment.extract()?;
    validate(&options)?;
    debug!(
        max_heading_level = options.max_heading_level,
        open_links_in_new_tab = options.open_links_in_new_tab,
        allowed_schemes = ?options.allowed_schemes,
        "Resolved conversion options"
    );
    Ok(options)
}
