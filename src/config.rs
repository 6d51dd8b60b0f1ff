use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::{TransformError, TransformOptions};

const ENV_PREFIX: &str = "RECIPE_TRANSFORM";

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TransformConfig {
    /// Options used when the caller does not override them
    #[serde(default)]
    pub defaults: TransformOptions,
}

impl TransformConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_TRANSFORM__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_TRANSFORM__DEFAULTS__SPICE_LEVEL
    pub fn load() -> Result<Self, TransformError> {
        load_config()
    }
}

/// Load configuration from `config.toml` (optional) and the environment.
///
/// List values may be given as comma-separated environment variables, e.g.
/// `RECIPE_TRANSFORM__DEFAULTS__CUISINES=Italian,Thai`.
pub fn load_config() -> Result<TransformConfig, TransformError> {
    build_config(File::with_name("config").required(false))
}

/// Load configuration from an explicit file path plus the environment.
pub fn load_config_from(path: &Path) -> Result<TransformConfig, TransformError> {
    build_config(File::from(path).required(true))
}

fn build_config<S>(file: S) -> Result<TransformConfig, TransformError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_TRANSFORM__DEFAULTS__SWEETNESS
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("defaults.cuisines")
                .with_list_parse_key("defaults.flavor_profiles")
                .try_parsing(true),
        )
        .build()?;

    let config: TransformConfig = settings.try_deserialize()?;
    config.defaults.validate()?;
    Ok(config)
}
