use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIGURATION_PATH: &str = "configuration.toml";

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub database: DatabaseConfig,
    pub menu: MenuConfig,
}

impl Configuration {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let config = std::fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&config)?;
        Ok(cfg)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file holding the flight tables
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from("flight_management.db"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MenuConfig {
    /// What the operator must type to confirm a delete
    pub confirm_token: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            confirm_token: String::from("yes"),
        }
    }
}
