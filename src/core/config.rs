use crate::core::technique::Technique;
use crate::error::{GanfetchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub technique: String,
    pub destination: PathBuf,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            technique: Technique::CycleGan.name().to_string(),
            destination: PathBuf::from("./datasets"),
            verbose: true,
        }
    }
}

impl Config {
    /// Reads the user config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(GanfetchError::ConfigDirectoryNotFound) => {
                log::debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;

        if Technique::from_name(&config.technique).is_none() {
            return Err(GanfetchError::config_error(format!(
                "unknown technique '{}' in {}",
                config.technique,
                path.display()
            )));
        }

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("ganfetch").join("config.json"))
        .ok_or(GanfetchError::ConfigDirectoryNotFound)
}
