use crate::error::{Result, RolodexError};
use crate::model::FavoriteMarker;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_FAVORITE_MARKER: &str = "favorite-marker";
pub const KEY_DIRECTORY: &str = "directory";

/// Configuration for rolodex, stored as config.json in the config directory
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RolodexConfig {
    /// Glyph written in the favorite column
    #[serde(default)]
    pub favorite_marker: FavoriteMarker,

    /// Directory file used when no --file is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_FAVORITE_MARKER, KEY_DIRECTORY]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_FAVORITE_MARKER => Some(self.favorite_marker.to_string()),
            KEY_DIRECTORY => Some(
                self.directory
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_FAVORITE_MARKER => {
                let value = value.trim();
                if value.chars().count() != 1 {
                    return Err(format!(
                        "{} must be a single character, got \"{}\"",
                        KEY_FAVORITE_MARKER, value
                    ));
                }
                if value == ";" || value == "\"" {
                    return Err(format!("{} cannot be \"{}\"", KEY_FAVORITE_MARKER, value));
                }
                self.favorite_marker = FavoriteMarker::new(value);
                Ok(())
            }
            KEY_DIRECTORY => {
                let value = value.trim();
                self.directory = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::keys()
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}
