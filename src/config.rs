use serde::Deserialize;

use crate::core::naming::DEFAULT_GROUP_TAG;
use crate::core::store::DEFAULT_STORE_PATH;
use crate::utils::Result;

impl Config {

    pub fn init() -> Result<Self> {
        // get config toml dir from env, with default
        let config_path = std::env::var("NYAA_OVERRIDES_CONFIG_PATH")
            .unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            .set_default("logs.level", "warn")?
            .set_default("store.path", DEFAULT_STORE_PATH)?
            .set_default("naming.group_tag", DEFAULT_GROUP_TAG)?
            // Add in config toml, if any
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of NYAA_OVERRIDES)
            .add_source(config::Environment::with_prefix("NYAA_OVERRIDES").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logs: LogsConfig,
    pub store: StoreConfig,
    pub naming: NamingConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    pub level: String,
}

// ===============================================================================
// Store
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding the overrides, relative to the working directory.
    pub path: String,
}

// ===============================================================================
// Naming
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    /// Prefix put in front of the release group, e.g. "SZNJD" -> "SZNJD-Group".
    pub group_tag: String,
}
