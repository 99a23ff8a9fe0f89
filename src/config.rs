//! Desktop configuration
//!
//! Read from `desktop.json` in the app config directory. A missing file means
//! defaults; a malformed one is an error the caller decides how to handle.

use crate::error::{DesktopError, Result};
use crate::i18n::Language;
use crate::state::window::WindowId;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "desktop.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Locale selected at startup
    pub language: Language,
    /// The one window that starts open and focused
    pub open_at_startup: WindowId,
    pub cascade: CascadeConfig,
    pub clock: ClockConfig,
    pub unknown_window: UnknownWindowPolicy,
    pub focus_on_close: FocusOnClose,
    /// Embed the background ambience track
    pub ambience: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            open_at_startup: WindowId::About,
            cascade: CascadeConfig::default(),
            clock: ClockConfig::default(),
            unknown_window: UnknownWindowPolicy::Ignore,
            focus_on_close: FocusOnClose::Keep,
            ambience: true,
        }
    }
}

impl DesktopConfig {
    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: DesktopConfig =
            serde_json::from_str(&content).map_err(|e| DesktopError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if StrftimeItems::new(&config.clock.format).any(|item| matches!(item, Item::Error)) {
            return Err(DesktopError::Config {
                path: path.to_path_buf(),
                message: format!("invalid clock format '{}'", config.clock.format),
            });
        }

        info!("Configuration loaded from {:?}", path);
        debug!("Config: {:?}", config);
        Ok(config)
    }
}

/// Initial frame placement: the k-th visible frame mounts at `origin + k * step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CascadeConfig {
    pub origin_x: f64,
    pub origin_y: f64,
    pub step: f64,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            origin_x: 100.0,
            origin_y: 100.0,
            step: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockConfig {
    pub interval_ms: u64,
    /// chrono strftime pattern for the taskbar clock
    pub format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            format: "%H:%M".to_string(),
        }
    }
}

/// What to do with a window id the fixed set doesn't contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownWindowPolicy {
    /// Log and treat the operation as a no-op
    Ignore,
    /// Fail the operation with `DesktopError::UnknownWindow`
    Reject,
}

/// Where focus goes when the active window is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusOnClose {
    /// Leave the active pointer on the closed window
    Keep,
    /// Move focus to the most recently opened window still on screen
    MostRecent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DesktopConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, DesktopConfig::default());
        assert_eq!(config.clock.interval_ms, 1000);
        assert_eq!(config.cascade.step, 40.0);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "language": "en", "focusOnClose": "most-recent", "cascade": {{ "step": 25 }} }}"#
        )
        .unwrap();

        let config = DesktopConfig::load(&path).unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.focus_on_close, FocusOnClose::MostRecent);
        assert_eq!(config.cascade.step, 25.0);
        assert_eq!(config.cascade.origin_x, 100.0);
        assert_eq!(config.open_at_startup, WindowId::About);
        assert_eq!(config.unknown_window, UnknownWindowPolicy::Ignore);
        assert!(config.ambience);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = DesktopConfig::load(&path).unwrap_err();
        assert!(matches!(err, DesktopError::Config { .. }));
    }

    #[test]
    fn test_invalid_clock_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "clock": { "format": "%Q" } }"#).unwrap();

        assert!(matches!(
            DesktopConfig::load(&path),
            Err(DesktopError::Config { .. })
        ));
    }

    #[test]
    fn test_unknown_startup_window_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "openAtStartup": "terminal" }"#).unwrap();

        assert!(DesktopConfig::load(&path).is_err());
    }
}
