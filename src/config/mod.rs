pub mod log;
pub mod node;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

pub use log::LoggingConfig;
pub use node::NodeConfig;

use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Loads `Config.toml` if present; a missing file means the built-in defaults.
pub async fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("config_file_missing::using_defaults");
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|e| err_with_loc!(ConfigError::OpenFileError(e.to_string())))?;
    let config = toml::from_str(&raw)
        .map_err(|e| err_with_loc!(ConfigError::ParseError(e.to_string())))?;
    Ok(config)
}
