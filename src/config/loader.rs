use crate::config::{FeeScheduleConfig, LoggingConfig};
use crate::error::{Error, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Built-in configuration, used as the lowest-priority source.
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

pub const ENV_PREFIX: &str = "MARKETFEES";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fees: FeeScheduleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self> {
        Self::load_from("config", env)
    }

    /// Layers, lowest priority first: built-in defaults, `{dir}/default`,
    /// `{dir}/{env}`, then `MARKETFEES__SECTION__KEY` environment variables.
    pub fn load_from(dir: &str, env: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", dir, env)).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        config.try_deserialize()
            .map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Parse the built-in defaults without touching the filesystem or environment.
    pub fn builtin() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG)
            .map_err(|e| Error::ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::commission::default_commission_settings;
    use crate::config::promotions::default_promotions;
    use crate::config::tiers::default_volume_tiers;

    #[test]
    fn builtin_document_matches_code_defaults() {
        let config = AppConfig::builtin().unwrap();
        assert_eq!(config.fees.default_rate_percent, crate::config::commission::default_rate());
        assert_eq!(config.fees.commission_settings, default_commission_settings());
        assert_eq!(config.fees.volume_tiers, default_volume_tiers());
        assert_eq!(config.fees.promotions, default_promotions());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_directory_falls_back_to_builtin() {
        let config = AppConfig::load_from("does/not/exist", "production").unwrap();
        assert_eq!(config.fees.volume_tiers.len(), 4);
    }
}
