//! Core functionality for SetKit
//!
//! This crate provides the chainable [`Setter`] wrapper and the [`Settable`]
//! capability trait, the corner shape descriptors consumed by corner-rounding
//! setters, and the geometry, color, configuration and logging types shared by
//! the widget crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod setter;
pub mod shape;
pub mod types;

pub use config::{ConfigManager, DisplayConfig, LoggingConfig, SetKitConfig};
pub use error::{Result, SetKitError};
pub use logging::{LogCategory, LogLevel};
pub use setter::{set, Settable, Setter};
pub use shape::{CornerMask, CornerStyle, ViewShape};
pub use types::{
    Axis, Color, EdgeInsets, Font, FontWeight, Image, Offset, Point, Rect, Size, TextAlignment,
    Transform, UserInterfaceStyle,
};

// Generated setters log through this path so deriving crates need no direct
// `tracing` dependency.
#[doc(hidden)]
pub use tracing;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        setter::{set, Settable, Setter},
        shape::{CornerMask, ViewShape},
        types::{
            Axis, Color, EdgeInsets, Font, FontWeight, Image, Offset, Point, Rect, Size,
            TextAlignment, Transform, UserInterfaceStyle,
        },
    };
}

/// Framework version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core framework with default configuration
pub fn init() -> Result<()> {
    init_with_config(SetKitConfig::default())
}

/// Initialize the core framework
///
/// Installs the global configuration manager and the logging subscriber.
pub fn init_with_config(config: SetKitConfig) -> Result<()> {
    let manager = config::init_config_with(config);
    logging::init(&manager.get_logging_config())?;

    tracing::info!(target: "setkit::core", "SetKit Core v{} initialized", VERSION);
    Ok(())
}
