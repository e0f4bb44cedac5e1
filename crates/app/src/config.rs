//! Companion configuration loaded from `companion.toml`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hexmap::{PlayerCount, TileMetrics, UnsupportedPlayerCount};
use serde::Deserialize;
use thiserror::Error;

use crate::APP_NAME;

pub const CONFIG_FILE_NAME: &str = "companion.toml";
pub const DATA_DIR_ENV: &str = "HEXMAP_DATA_DIR";

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the board slots; the platform data directory when unset.
    pub data_dir: Option<PathBuf>,
    pub default_players: Option<u8>,
    pub tile: TileMetrics,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

impl AppConfig {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push(CONFIG_FILE_NAME);
            path
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// An explicit path must exist; the default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::get_default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Environment override first, then the config file, then the platform default.
    pub fn resolve_data_dir(
        &self,
        env_override: Option<&str>,
        platform_default: Option<PathBuf>,
    ) -> Option<PathBuf> {
        if let Some(raw) = env_override.filter(|raw| !raw.trim().is_empty()) {
            return Some(PathBuf::from(raw));
        }
        self.data_dir.clone().or(platform_default)
    }

    pub fn default_player_count(&self) -> Result<PlayerCount, UnsupportedPlayerCount> {
        self.default_players.map_or(Ok(PlayerCount::Four), PlayerCount::try_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tile, TileMetrics { width: 82.0, height: 72.0 });
        assert_eq!(config.default_player_count(), Ok(PlayerCount::Four));
    }

    #[test]
    fn full_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            data_dir = "/srv/boards"
            default_players = 6

            [tile]
            width = 100.0
            height = 88.0
            "#,
        )
        .expect("config parses");

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/boards")));
        assert_eq!(config.default_player_count(), Ok(PlayerCount::Six));
        assert_eq!(config.tile.width, 100.0);
    }

    #[test]
    fn unsupported_default_players_is_an_error() {
        let config: AppConfig = toml::from_str("default_players = 3").expect("config parses");
        assert_eq!(config.default_player_count(), Err(UnsupportedPlayerCount(3)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<AppConfig>("seed = 4").is_err());
    }

    #[test]
    fn data_dir_prefers_env_then_file_then_platform() {
        let platform = Some(PathBuf::from("/platform"));
        let mut config = AppConfig::default();
        assert_eq!(config.resolve_data_dir(None, platform.clone()), platform);

        config.data_dir = Some(PathBuf::from("/from-file"));
        assert_eq!(config.resolve_data_dir(Some("  "), platform.clone()), config.data_dir);
        assert_eq!(
            config.resolve_data_dir(Some("/from-env"), platform),
            Some(PathBuf::from("/from-env"))
        );
    }

    #[test]
    fn explicit_path_must_exist_and_parse() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("missing.toml");
        assert!(matches!(AppConfig::discover(Some(&missing)), Err(ConfigError::Io { .. })));

        let broken = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&broken, "default_players = \"six\"").expect("write");
        assert!(matches!(AppConfig::discover(Some(&broken)), Err(ConfigError::Parse { .. })));
    }
}
