use crate::model::Section;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Section shown when the dashboard starts
    pub initial_section: Section,
    pub show_splash: bool,
    pub splash_duration_ms: u64,
    /// Event poll timeout
    pub tick_rate_ms: u64,
    /// tracing filter directive, overridden by CLIMATE_TUI_LOG
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_section: Section::Dashboard,
            show_splash: true,
            splash_duration_ms: 1500,
            tick_rate_ms: 100,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".climate-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    /// Read a config file. `Ok(None)` if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Load the config from the default location, writing defaults on first run.
    ///
    /// Nothing is logged here; the returned origin is reported once logging
    /// is installed, since the log level itself comes from this file.
    pub fn load_or_init() -> (Config, ConfigOrigin) {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => (
                Config::default(),
                ConfigOrigin::Defaults("HOME is not set".to_string()),
            ),
        }
    }

    /// A broken config file is replaced by defaults in memory only.
    pub fn load_or_init_at(path: &Path) -> (Config, ConfigOrigin) {
        match Self::load_from(path) {
            Ok(Some(config)) => (config, ConfigOrigin::Loaded(path.to_path_buf())),
            Ok(None) => {
                let config = Config::default();
                let origin = match config.save_to(path) {
                    Ok(()) => ConfigOrigin::Created(path.to_path_buf()),
                    Err(e) => ConfigOrigin::Defaults(format!(
                        "could not write default config: {:#}",
                        e
                    )),
                };
                (config, origin)
            }
            Err(e) => (Config::default(), ConfigOrigin::Defaults(format!("{:#}", e))),
        }
    }
}

/// Where the running config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    Loaded(PathBuf),
    /// First run, defaults written to this path
    Created(PathBuf),
    /// Defaults in memory; the reason the file could not be used
    Defaults(String),
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::Loaded(path) => info!(path = %path.display(), "config loaded"),
            ConfigOrigin::Created(path) => {
                info!(path = %path.display(), "default config written")
            }
            ConfigOrigin::Defaults(reason) => warn!(reason = %reason, "using default config"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_from(&path).unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            initial_section: Section::About,
            show_splash: false,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "initial_section": "resources" }"#).unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.initial_section, Section::Resources);
        assert!(config.show_splash);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let (config, origin) = Config::load_or_init_at(&path);
        assert_eq!(config, Config::default());
        assert_eq!(origin, ConfigOrigin::Created(path.clone()));
        assert_eq!(Config::load_from(&path).unwrap(), Some(Config::default()));
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "show_splash": false }"#).unwrap();

        let (config, origin) = Config::load_or_init_at(&path);
        assert!(!config.show_splash);
        assert_eq!(origin, ConfigOrigin::Loaded(path));
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let (config, origin) = Config::load_or_init_at(&path);
        assert_eq!(config, Config::default());
        match origin {
            ConfigOrigin::Defaults(reason) => assert!(reason.contains("Failed to parse")),
            other => panic!("expected defaults, got {:?}", other),
        }
        // The broken file is left for the user to fix
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
