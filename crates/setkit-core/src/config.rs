//! Configuration system for SetKit

use crate::error::{Result, SetKitError};
use crate::types::UserInterfaceStyle;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Scale used when no configuration manager has been initialised.
pub const DEFAULT_SCREEN_SCALE: f32 = 2.0;

/// Global configuration for SetKit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetKitConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Display properties setters read from the host
    pub display: DisplayConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Category-specific log levels (category name -> level string)
    pub category_levels: HashMap<String, String>,
    /// Emit ANSI colors
    pub with_ansi: bool,
    /// Print the event target next to each message
    pub with_target: bool,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Points to pixels ratio of the main screen
    pub screen_scale: f32,
    /// Appearance newly created views start with
    pub user_interface_style: UserInterfaceStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let mut category_levels = HashMap::new();

        category_levels.insert("core".to_string(), "info".to_string());
        category_levels.insert("config".to_string(), "info".to_string());
        category_levels.insert("widgets".to_string(), "info".to_string());
        // One event per setter call; far too chatty by default
        category_levels.insert("setter".to_string(), "warn".to_string());

        Self {
            category_levels,
            with_ansi: true,
            with_target: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_scale: DEFAULT_SCREEN_SCALE,
            user_interface_style: UserInterfaceStyle::Unspecified,
        }
    }
}

impl SetKitConfig {
    /// Parse a RON document
    pub fn from_ron_str(source: &str) -> Result<Self> {
        Ok(ron::from_str(source)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load from a `.ron` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            other => {
                return Err(SetKitError::configuration(format!(
                    "unsupported config extension {:?} for {}",
                    other,
                    path.display()
                )))
            }
        };
        tracing::debug!(target: "setkit::config", path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

/// Global configuration manager
#[derive(Debug)]
pub struct ConfigManager {
    config: Arc<RwLock<SetKitConfig>>,
}

impl ConfigManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self::with_config(SetKitConfig::default())
    }

    /// Create a configuration manager with custom config
    pub fn with_config(config: SetKitConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a copy of the current configuration
    pub fn get_config(&self) -> SetKitConfig {
        self.config.read().clone()
    }

    /// Update the configuration
    pub fn update_config<F>(&self, updater: F)
    where
        F: FnOnce(&mut SetKitConfig),
    {
        let mut config = self.config.write();
        updater(&mut *config);
    }

    /// Get the current logging configuration
    pub fn get_logging_config(&self) -> LoggingConfig {
        self.config.read().logging.clone()
    }

    /// Main screen scale
    pub fn screen_scale(&self) -> f32 {
        self.config.read().display.screen_scale
    }

    /// Set log level for a specific category
    pub fn set_category_level(&self, category: &str, level: &str) {
        self.update_config(|config| {
            config
                .logging
                .category_levels
                .insert(category.to_string(), level.to_string());
        });
    }

    /// Get log level for a specific category
    pub fn get_category_level(&self, category: &str) -> Option<String> {
        self.config.read().logging.category_levels.get(category).cloned()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global configuration instance
static CONFIG_MANAGER: OnceLock<ConfigManager> = OnceLock::new();

/// Initialize the global configuration manager
pub fn init_config() -> &'static ConfigManager {
    CONFIG_MANAGER.get_or_init(ConfigManager::new)
}

/// Initialize the global configuration manager with custom config
///
/// Has no effect on the stored config if the manager already exists.
pub fn init_config_with(config: SetKitConfig) -> &'static ConfigManager {
    CONFIG_MANAGER.get_or_init(|| ConfigManager::with_config(config))
}

/// Get the global configuration manager
pub fn get_config_manager() -> Option<&'static ConfigManager> {
    CONFIG_MANAGER.get()
}

/// Main screen scale from the global config, or [`DEFAULT_SCREEN_SCALE`]
pub fn screen_scale() -> f32 {
    get_config_manager()
        .map(ConfigManager::screen_scale)
        .unwrap_or(DEFAULT_SCREEN_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SetKitConfig::default();

        assert_eq!(config.display.screen_scale, DEFAULT_SCREEN_SCALE);
        assert_eq!(
            config.logging.category_levels.get("setter"),
            Some(&"warn".to_string())
        );
        assert_eq!(
            config.logging.category_levels.get("widgets"),
            Some(&"info".to_string())
        );
    }

    #[test]
    fn test_config_manager() {
        let manager = ConfigManager::new();

        manager.set_category_level("setter", "trace");
        assert_eq!(manager.get_category_level("setter"), Some("trace".to_string()));
        assert_eq!(manager.get_category_level("missing"), None);

        manager.update_config(|config| config.display.screen_scale = 3.0);
        assert_eq!(manager.screen_scale(), 3.0);
    }

    #[test]
    fn test_ron_partial_document_uses_defaults() {
        let config = SetKitConfig::from_ron_str("(display: (screen_scale: 3.0))").unwrap();
        assert_eq!(config.display.screen_scale, 3.0);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_json_document() {
        let config = SetKitConfig::from_json_str(
            r#"{"display": {"user_interface_style": "dark"}, "logging": {"with_ansi": false}}"#,
        )
        .unwrap();
        assert_eq!(config.display.user_interface_style, UserInterfaceStyle::Dark);
        assert!(!config.logging.with_ansi);
        assert_eq!(
            config.logging.category_levels,
            LoggingConfig::default().category_levels
        );
    }

    #[test]
    fn test_parse_errors_are_reported() {
        let err = SetKitConfig::from_ron_str("(display: ").unwrap_err();
        assert!(matches!(err, SetKitError::Parse { format: "RON", .. }));
        let err = SetKitConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, SetKitError::Parse { format: "JSON", .. }));
    }
}
