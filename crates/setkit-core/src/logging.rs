//! Logging setup for SetKit
//!
//! Events go through `tracing`. Each [`LogCategory`] owns one event target,
//! and per-category levels from [`LoggingConfig`] become `EnvFilter`
//! directives for those targets.

use crate::config::LoggingConfig;
use crate::error::{Result, SetKitError};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Level used for categories the config does not mention.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Log levels supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Log categories for organizing log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogCategory {
    Core,
    Config,
    Setter,
    Widgets,
}

impl LogCategory {
    pub const ALL: [LogCategory; 4] = [
        LogCategory::Core,
        LogCategory::Config,
        LogCategory::Setter,
        LogCategory::Widgets,
    ];

    /// Name used as the key in [`LoggingConfig::category_levels`]
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Core => "core",
            LogCategory::Config => "config",
            LogCategory::Setter => "setter",
            LogCategory::Widgets => "widgets",
        }
    }

    /// `tracing` target events of this category are emitted under
    pub fn target(&self) -> &'static str {
        match self {
            LogCategory::Core => "setkit::core",
            LogCategory::Config => "setkit::config",
            LogCategory::Setter => "setkit::setter",
            LogCategory::Widgets => "setkit::widgets",
        }
    }

    /// Look up a category by its config name
    pub fn from_name(name: &str) -> Option<LogCategory> {
        LogCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl LogLevel {
    /// Convert string to LogLevel
    pub fn from_str(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Convert LogLevel to string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Level lookup over a logging configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    config: LoggingConfig,
}

impl LoggerConfig {
    /// Create a new logger configuration
    pub fn new(config: LoggingConfig) -> Self {
        Self { config }
    }

    /// Configured level for a category, if it parses
    pub fn level_for(&self, category: &str) -> Option<LogLevel> {
        self.config
            .category_levels
            .get(category)
            .and_then(|level| LogLevel::from_str(level))
    }

    /// Check if a log level is enabled for a category
    pub fn is_level_enabled(&self, category: &str, level: LogLevel) -> bool {
        level >= self.level_for(category).unwrap_or(DEFAULT_LEVEL)
    }

    /// Update the configuration
    pub fn update_config(&mut self, config: LoggingConfig) {
        self.config = config;
    }
}

/// Filter directives for a config, sorted by target.
///
/// Known category names map to their target; anything else is taken as a raw
/// target. Levels that do not parse are skipped with a warning.
pub fn directives(config: &LoggingConfig) -> Vec<String> {
    let mut directives: Vec<String> = config
        .category_levels
        .iter()
        .filter_map(|(category, level)| {
            let Some(level) = LogLevel::from_str(level) else {
                tracing::warn!(target: "setkit::config", %category, %level, "ignoring unknown log level");
                return None;
            };
            let target = LogCategory::from_name(category)
                .map(|c| c.target())
                .unwrap_or(category.as_str());
            Some(format!("{}={}", target, level))
        })
        .collect();
    directives.sort();
    directives
}

/// Build the `EnvFilter` the subscriber is installed with
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let mut filter = EnvFilter::new(DEFAULT_LEVEL.as_str());
    for directive in directives(config) {
        match directive.parse::<tracing_subscriber::filter::Directive>() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(err) => {
                tracing::warn!(target: "setkit::config", %directive, %err, "skipping filter directive")
            }
        }
    }
    filter
}

/// Install the global `fmt` subscriber
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .try_init()
        .map_err(|e| SetKitError::initialization(format!("Failed to initialize logging: {}", e)))
}
