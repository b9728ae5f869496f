//! # Startup
//!
//! Builds the API and configuration the UI works with.
//!
//! ## Config Directory Resolution
//!
//! 1. If `config_override` is given (the CLI fills it from `ROLODEX_CONFIG_DIR`)
//!    it is used as is.
//! 2. Otherwise the OS config directory for rolodex, via the `directories`
//!    crate (e.g. `~/.config/rolodex` on Linux).
//!
//! ## Directory File Resolution
//!
//! One-shot commands need to know which directory file to act on:
//! 1. An explicit path (`--file` or `ROLODEX_FILE`) wins.
//! 2. Otherwise the `directory` config key.
//! 3. Otherwise there is none, and the command reports it.

use crate::api::{RolodexApi, RolodexPaths};
use crate::config::RolodexConfig;
use crate::error::{Result, RolodexError};
use crate::session::Session;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct RolodexContext {
    pub api: RolodexApi<FileStore>,
    pub config: RolodexConfig,
}

pub fn config_dir(config_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = config_override {
        return Ok(dir.to_path_buf());
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Config("Could not determine config dir".to_string()))
}

pub fn initialize(config_override: Option<&Path>) -> Result<RolodexContext> {
    let config_dir = config_dir(config_override)?;
    let config = RolodexConfig::load(&config_dir)?;

    let marker = config.favorite_marker.clone();
    let store = FileStore::new().with_marker(marker.clone());
    let session = Session::new().with_marker(marker);
    let api = RolodexApi::new(store, session, RolodexPaths { config_dir });

    Ok(RolodexContext { api, config })
}

/// Picks the directory file for a one-shot command.
pub fn resolve_directory_file(explicit: Option<PathBuf>, config: &RolodexConfig) -> Option<PathBuf> {
    explicit.or_else(|| config.directory.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_FAVORITE_MARKER;
    use tempfile::TempDir;

    #[test]
    fn override_is_used_verbatim() {
        let temp = TempDir::new().unwrap();
        assert_eq!(config_dir(Some(temp.path())).unwrap(), temp.path());
    }

    #[test]
    fn marker_from_config_reaches_session() {
        let temp = TempDir::new().unwrap();
        let mut config = RolodexConfig::default();
        config.set(KEY_FAVORITE_MARKER, "★").unwrap();
        config.save(temp.path()).unwrap();

        let ctx = initialize(Some(temp.path())).unwrap();
        assert_eq!(ctx.api.marker().as_str(), "★");
        assert_eq!(ctx.api.paths().config_dir, temp.path());
        assert!(!ctx.api.session().is_file_open());
    }

    #[test]
    fn explicit_file_beats_config() {
        let config = RolodexConfig {
            directory: Some(PathBuf::from("configured.csv")),
            ..RolodexConfig::default()
        };
        assert_eq!(
            resolve_directory_file(Some(PathBuf::from("given.csv")), &config),
            Some(PathBuf::from("given.csv"))
        );
        assert_eq!(
            resolve_directory_file(None, &config),
            Some(PathBuf::from("configured.csv"))
        );
        assert_eq!(resolve_directory_file(None, &RolodexConfig::default()), None);
    }
}
