//! Configuration file support for textmark.
//!
//! The config supplies the category catalog and user preferences at startup.
//! The catalog is fixed for the rest of the session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::ColorSpec;
use crate::model::{Category, CategoryRegistry, RegistryError, default_categories};
use crate::overlay::DEFAULT_OVERLAY_OPACITY;
use crate::theme::ThemeMode;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Session configuration that can be loaded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,

    /// Category catalog, first entry is the default
    #[serde(default = "default_category_configs")]
    pub categories: Vec<CategoryConfig>,
}

fn default_app_name() -> String {
    "textmark".to_string()
}

fn default_category_configs() -> Vec<CategoryConfig> {
    default_categories().iter().map(CategoryConfig::from).collect()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Dark theme enabled at startup
    #[serde(default)]
    pub dark_theme: bool,

    /// Category preselected for new highlights
    #[serde(default)]
    pub default_category: Option<String>,

    /// Overlay fill opacity, in (0, 1]
    #[serde(default = "default_overlay_opacity")]
    pub overlay_opacity: f32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_overlay_opacity() -> f32 {
    DEFAULT_OVERLAY_OPACITY
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_theme: false,
            default_category: None,
            overlay_opacity: default_overlay_opacity(),
            log_level: LogLevel::default(),
        }
    }
}

impl Preferences {
    /// Theme to start the session in.
    pub fn theme(&self) -> ThemeMode {
        ThemeMode::from_dark_flag(self.dark_theme)
    }

    /// Overlay opacity, rejected unless it lies in (0, 1].
    pub fn checked_opacity(&self) -> Result<f32, ConfigError> {
        let opacity = self.overlay_opacity;
        if opacity > 0.0 && opacity <= 1.0 {
            Ok(opacity)
        } else {
            Err(ConfigError::InvalidOpacity(opacity))
        }
    }
}

/// Category configuration for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Display name of the category
    pub name: String,
    /// Fill in light mode, as `#rrggbb`
    pub light_color: ColorSpec,
    /// Fill in dark mode, as `#rrggbb`
    pub dark_color: ColorSpec,
}

impl From<&Category> for CategoryConfig {
    fn from(cat: &Category) -> Self {
        Self {
            name: cat.name.clone(),
            light_color: cat.light_color,
            dark_color: cat.dark_color,
        }
    }
}

impl From<CategoryConfig> for Category {
    fn from(config: CategoryConfig) -> Self {
        Category::new(&config.name, config.light_color, config.dark_color)
    }
}

impl SessionConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: Preferences::default(),
            categories: default_category_configs(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.preferences.checked_opacity()?;

        Ok(config)
    }

    /// Build the category registry described by this config.
    pub fn to_registry(&self) -> Result<CategoryRegistry, ConfigError> {
        let categories = self.categories.iter().cloned().map(Category::from).collect();
        Ok(CategoryRegistry::new(categories)?)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "textmark-config.json"
    }

    /// Get the default config file path.
    /// Returns None when no config or home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("textmark").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("textmark")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from a file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories if needed.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Overlay opacity outside (0, 1]
    #[error("Overlay opacity {0} must be greater than 0 and at most 1")]
    InvalidOpacity(f32),

    /// Category catalog failed validation
    #[error("Invalid categories: {0}")]
    Registry(#[from] RegistryError),

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = SessionConfig::new();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"Important\""));
        assert!(json.contains("\"#fef08a\""));

        let parsed = SessionConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_minimal_config_fills_defaults() {
        let config = SessionConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config.app_name, "textmark");
        assert_eq!(config.preferences, Preferences::default());
        assert_eq!(config.categories.len(), 4);
        assert_eq!(config.preferences.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_custom_categories() {
        let json = r##"{
            "version": 1,
            "preferences": { "dark_theme": true, "log_level": "debug" },
            "categories": [
                { "name": "Todo", "light_color": "#ffeeaa", "dark_color": "#554400" },
                { "name": "Done", "light_color": "#aaffaa", "dark_color": "#005500" }
            ]
        }"##;

        let config = SessionConfig::from_json(json).unwrap();
        assert_eq!(config.preferences.theme(), ThemeMode::Dark);
        assert_eq!(config.preferences.log_level, LogLevel::Debug);

        let registry = config.to_registry().unwrap();
        assert_eq!(registry.default_category().name, "Todo");
        assert_eq!(
            registry.color_for("Done", ThemeMode::Dark),
            ColorSpec::rgb(0, 0x55, 0)
        );
    }

    #[test]
    fn test_version_too_new() {
        let result = SessionConfig::from_json(r#"{ "version": 99 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            })
        ));
    }

    #[test]
    fn test_invalid_opacity() {
        let json = r#"{ "version": 1, "preferences": { "overlay_opacity": 0.0 } }"#;
        assert!(matches!(
            SessionConfig::from_json(json),
            Err(ConfigError::InvalidOpacity(_))
        ));
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let json = r##"{
            "version": 1,
            "categories": [{ "name": "X", "light_color": "yellow", "dark_color": "#000000" }]
        }"##;
        assert!(matches!(
            SessionConfig::from_json(json),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_categories_rejected_by_registry() {
        let config = SessionConfig::from_json(r#"{ "version": 1, "categories": [] }"#).unwrap();
        assert!(matches!(
            config.to_registry(),
            Err(ConfigError::Registry(RegistryError::Empty))
        ));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::default().name(), "Info");
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = std::env::temp_dir().join(format!("textmark-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(SessionConfig::default_filename());

        let mut config = SessionConfig::new();
        config.preferences.default_category = Some("Note".to_string());
        config.save_to_path(&path).unwrap();

        let loaded = SessionConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("textmark-definitely-missing.json");
        assert!(matches!(
            SessionConfig::load_from_path(&path),
            Err(ConfigError::IoError(_))
        ));
    }
}
