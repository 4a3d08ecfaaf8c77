//! Widget families for SetKit
//!
//! Every family is a plain struct built on [`view::View`] (or on
//! [`view_controller::ViewController`] for controllers). Deriving `Setters`
//! gives each one a generated setter trait, and the hand-written
//! `*SetterExt` traits add the behavioral setters: animated variants, nested
//! configuration closures and on-demand creation of missing parts.
//!
//! ```ignore
//! use setkit_widgets::prelude::*;
//!
//! let mut label = Label::default();
//! label.set().text("Hello").text_color(Color::SYSTEM_BLUE).hidden(false);
//! ```

pub mod activity_indicator;
pub mod alert_controller;
pub mod appearance;
pub mod bar_item;
pub mod button;
pub mod collection_view;
pub mod collection_view_cell;
pub mod control;
pub mod date_picker;
pub mod image_picker_controller;
pub mod image_view;
pub mod label;
pub mod menu;
pub mod navigation_bar;
pub mod navigation_controller;
pub mod navigation_item;
pub mod page_control;
pub mod picker_view;
pub mod progress_view;
pub mod reuse;
pub mod scroll_view;
pub mod search_bar;
pub mod search_controller;
pub mod search_text_field;
pub mod segmented_control;
pub mod stack_view;
pub mod switch;
pub mod tab_bar;
pub mod tab_bar_controller;
pub mod table_view;
pub mod table_view_cell;
pub mod text_field;
pub mod text_view;
pub mod toolbar;
pub mod video_editor_controller;
pub mod view;
pub mod view_controller;
pub mod widget;

pub mod prelude;

pub use widget::{Action, Widget, WidgetId};
pub use view::View;
pub use view_controller::{Controller, ViewController};
pub use setkit_macros::Setters;

/// Initialize the widgets crate
pub fn init() -> setkit_core::Result<()> {
    tracing::info!(
        target: "setkit::widgets",
        appearance = cfg!(feature = "appearance"),
        pointer_interactions = cfg!(feature = "pointer-interactions"),
        menus = cfg!(feature = "menus"),
        search_tokens = cfg!(feature = "search-tokens"),
        "SetKit Widgets initialized"
    );
    Ok(())
}
