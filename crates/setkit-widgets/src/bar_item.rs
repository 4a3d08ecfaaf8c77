//! Items shown in navigation bars, toolbars and tab bars

use crate::menu::Menu;
use crate::widget::{Action, Widget};
use setkit_core::types::{Color, Image};
use setkit_macros::Setters;

/// Overall bar appearance shared by navigation bars, toolbars and search bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStyle {
    #[default]
    Default,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarButtonItemStyle {
    #[default]
    Plain,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemItem {
    Done,
    Cancel,
    Edit,
    Save,
    Add,
    FlexibleSpace,
    FixedSpace,
    Compose,
    Reply,
    Action,
    Organize,
    Bookmarks,
    Search,
    Refresh,
    Stop,
    Camera,
    Trash,
    Play,
    Pause,
    Close,
}

#[derive(Debug, Clone, Setters)]
pub struct BarButtonItem {
    #[set(into, strip_option)]
    pub title: Option<String>,
    #[set(strip_option)]
    pub image: Option<Image>,
    pub style: BarButtonItemStyle,
    #[set(strip_option)]
    pub system_item: Option<SystemItem>,
    pub enabled: bool,
    #[set(strip_option)]
    pub tint_color: Option<Color>,
    /// Fixed width; zero sizes the item to its content
    pub width: f32,
    pub tag: i64,
    #[set(strip_option)]
    pub action: Option<Action>,
    #[set(strip_option, feature = "menus")]
    pub menu: Option<Menu>,
    #[set(skip)]
    custom_view: Option<Box<dyn Widget>>,
}

impl Default for BarButtonItem {
    fn default() -> Self {
        Self {
            title: None,
            image: None,
            style: BarButtonItemStyle::Plain,
            system_item: None,
            enabled: true,
            tint_color: None,
            width: 0.0,
            tag: 0,
            action: None,
            menu: None,
            custom_view: None,
        }
    }
}

impl BarButtonItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn system(item: SystemItem) -> Self {
        Self {
            system_item: Some(item),
            ..Self::default()
        }
    }

    /// Item hosting an arbitrary widget instead of a title or image
    pub fn custom(view: impl Widget) -> Self {
        Self {
            custom_view: Some(Box::new(view)),
            ..Self::default()
        }
    }

    pub fn custom_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.custom_view.as_deref()
    }

    /// Run the item's action; disabled items and items without one do nothing
    pub fn perform(&self) -> bool {
        match &self.action {
            Some(action) if self.enabled => {
                action.call();
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Setters)]
pub struct TabBarItem {
    #[set(into, strip_option)]
    pub title: Option<String>,
    #[set(strip_option)]
    pub image: Option<Image>,
    #[set(strip_option)]
    pub selected_image: Option<Image>,
    #[set(into, strip_option)]
    pub badge_value: Option<String>,
    #[set(strip_option)]
    pub badge_color: Option<Color>,
    pub tag: i64,
}

impl TabBarItem {
    pub fn new(title: impl Into<String>, image: Option<Image>) -> Self {
        Self {
            title: Some(title.into()),
            image,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setkit_core::setter::Settable;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_bar_button_item_action() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let mut item = BarButtonItem::new("Save");
        item.set()
            .style(BarButtonItemStyle::Done)
            .action(Action::new(move || flag.store(true, Ordering::SeqCst)));

        assert!(item.perform());
        assert!(fired.load(Ordering::SeqCst));

        item.set().enabled(false);
        assert!(!item.perform());
    }

    #[test]
    fn test_tab_bar_item_badge() {
        let mut item = TabBarItem::new("Inbox", Some(Image::named("tray")));
        item.set().badge_value("3").tag(1);

        assert_eq!(item.badge_value.as_deref(), Some("3"));
        assert_eq!(item.tag, 1);
    }
}
