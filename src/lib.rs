//! SetKit - chainable property setters for retained UI widget trees
//!
//! Every widget family exposes its configurable properties as setters on a
//! shared [`Setter`] wrapper. A chain applies each value to the one widget it
//! wraps, in call order, and inherited families contribute their setters to
//! every descendant:
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let mut button = Button::default();
//! button
//!     .set()
//!     .title("Count")
//!     .title_color(Color::WHITE)
//!     .background_color(Color::SYSTEM_BLUE)
//!     .corners(ViewShape::RoundedRect(10.0));
//!
//! assert_eq!(button.current_title(), Some("Count"));
//! ```

pub use setkit_core;
pub use setkit_widgets;

pub use setkit_core::{set, Settable, Setter};
pub use setkit_macros::Setters;

use setkit_core::{Result, SetKitConfig};

/// Unified prelude module that exports all commonly used types
pub mod prelude {
    pub use setkit_widgets::prelude::*;
}

/// Initialize logging and configuration, then the widget crate
pub fn init() -> Result<()> {
    init_with_config(SetKitConfig::default())
}

/// Initialize with an explicit configuration
pub fn init_with_config(config: SetKitConfig) -> Result<()> {
    setkit_core::init_with_config(config)?;
    setkit_widgets::init()?;
    tracing::info!(target: "setkit", "SetKit v{} ready", VERSION);
    Ok(())
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init() {
        assert!(init().is_ok());
    }

    #[test]
    fn test_prelude_covers_views_and_controllers() {
        let mut card = View::with_frame(Rect::new(0.0, 0.0, 40.0, 40.0));
        card.set().corners(ViewShape::Circle).tint_color(Color::SYSTEM_RED);
        assert_eq!(card.layer.corner_radius, 20.0);

        let mut tabs = TabBarController::default();
        tabs.set().title("Main").view_controllers(vec![
            Box::new(ViewController::new("One")) as Box<dyn Controller>,
        ]);
        assert_eq!(tabs.tab_bar().items.len(), 1);
    }

    #[derive(Debug, Clone, Default, Setters)]
    struct Badge {
        #[set(parent)]
        view: View,
        #[set(into, strip_option)]
        value: Option<String>,
    }

    #[test]
    fn test_downstream_families_derive_setters() {
        let mut badge = Badge::default();
        badge.set().value("9+").hidden(true);

        assert_eq!(badge.value.as_deref(), Some("9+"));
        assert!(badge.view.hidden);
    }
}
