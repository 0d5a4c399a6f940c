//! File logging
//!
//! stdout is owned by the TUI, so log records go to a file next to the
//! config. If the file can't be opened no subscriber is installed.

use crate::config::Config;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "CLIMATE_TUI_LOG";

pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("climate-tui.log"))
}

/// Build the filter from `CLIMATE_TUI_LOG`, falling back to `default_directive`
pub fn build_filter(default_directive: &str) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref(), default_directive)
}

/// First valid directive wins: override, then default, then `info`
fn filter_from(override_directive: Option<&str>, default_directive: &str) -> EnvFilter {
    override_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(default_directive).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns the log file path when logging is active.
pub fn init(default_directive: &str) -> anyhow::Result<Option<PathBuf>> {
    match log_path() {
        Some(path) => init_at(&path, default_directive),
        None => Ok(None),
    }
}

/// Open `path` for appending, creating its directory. `None` if either fails.
fn open_log_file(path: &Path) -> Option<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn init_at(path: &Path, default_directive: &str) -> anyhow::Result<Option<PathBuf>> {
    let Some(file) = open_log_file(path) else {
        return Ok(None);
    };

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_invalid_directive_falls_back_to_info() {
        let filter = filter_from(None, "climate_tui=notalevel");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_default_directive_sets_level() {
        let filter = filter_from(None, "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_override_wins_over_default() {
        let filter = filter_from(Some("debug"), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_invalid_override_uses_default() {
        let filter = filter_from(Some("climate_tui=notalevel"), "error");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_unwritable_directory_disables_logging() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let path = blocker.join("logs").join("climate-tui.log");
        assert!(open_log_file(&path).is_none());
        assert_eq!(init_at(&path, "info").unwrap(), None);
    }

    #[test]
    fn test_log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("climate-tui.log");
        assert!(open_log_file(&path).is_some());
        assert!(path.exists());
    }
}
