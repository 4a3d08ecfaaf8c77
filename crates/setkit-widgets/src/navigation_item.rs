//! Per-screen content of the navigation bar

use crate::appearance::BarAppearance;
use crate::bar_item::BarButtonItem;
use crate::search_controller::SearchController;
use crate::widget::{target_mut, Widget};
use setkit_core::setter::Setter;
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LargeTitleDisplayMode {
    #[default]
    Automatic,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackButtonDisplayMode {
    #[default]
    Default,
    Generic,
    Minimal,
}

/// Title, bar buttons and search integration for one screen
///
/// Not a widget: the navigation bar renders the top item of its stack.
#[derive(Debug, Clone, Setters)]
pub struct NavigationItem {
    #[set(into, strip_option)]
    pub title: Option<String>,
    #[set(into, strip_option)]
    pub prompt: Option<String>,
    /// Title the next screen's back button shows for this item
    #[set(into, strip_option)]
    pub back_button_title: Option<String>,
    pub large_title_display_mode: LargeTitleDisplayMode,
    pub hides_search_bar_when_scrolling: bool,
    pub left_items_supplement_back_button: bool,
    pub back_button_display_mode: BackButtonDisplayMode,
    #[set(strip_option, feature = "appearance")]
    pub standard_appearance: Option<BarAppearance>,
    #[set(strip_option, feature = "appearance")]
    pub compact_appearance: Option<BarAppearance>,
    #[set(strip_option, feature = "appearance")]
    pub scroll_edge_appearance: Option<BarAppearance>,
    #[set(strip_option, feature = "appearance")]
    pub compact_scroll_edge_appearance: Option<BarAppearance>,
    #[set(skip)]
    title_view: Option<Box<dyn Widget>>,
    #[set(skip)]
    left_bar_button_items: Vec<BarButtonItem>,
    #[set(skip)]
    right_bar_button_items: Vec<BarButtonItem>,
    #[set(skip)]
    back_bar_button_item: Option<BarButtonItem>,
    #[set(skip)]
    hides_back_button: bool,
    #[set(skip)]
    search_controller: Option<Box<SearchController>>,
}

impl Default for NavigationItem {
    fn default() -> Self {
        Self {
            title: None,
            prompt: None,
            back_button_title: None,
            large_title_display_mode: LargeTitleDisplayMode::Automatic,
            hides_search_bar_when_scrolling: true,
            left_items_supplement_back_button: false,
            back_button_display_mode: BackButtonDisplayMode::Default,
            standard_appearance: None,
            compact_appearance: None,
            scroll_edge_appearance: None,
            compact_scroll_edge_appearance: None,
            title_view: None,
            left_bar_button_items: Vec::new(),
            right_bar_button_items: Vec::new(),
            back_bar_button_item: None,
            hides_back_button: false,
            search_controller: None,
        }
    }
}

impl NavigationItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn title_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.title_view.as_deref()
    }

    pub fn left_bar_button_items(&self) -> &[BarButtonItem] {
        &self.left_bar_button_items
    }

    pub fn right_bar_button_items(&self) -> &[BarButtonItem] {
        &self.right_bar_button_items
    }

    pub fn back_bar_button_item(&self) -> Option<&BarButtonItem> {
        self.back_bar_button_item.as_ref()
    }

    pub fn hides_back_button(&self) -> bool {
        self.hides_back_button
    }

    pub fn search_controller(&self) -> Option<&SearchController> {
        self.search_controller.as_deref()
    }

    pub fn search_controller_mut(&mut self) -> Option<&mut SearchController> {
        self.search_controller.as_deref_mut()
    }
}

pub trait NavigationItemSetterExt: Sized {
    fn title_view(self, view: impl Widget) -> Self;

    /// Replace the leading items with a single item
    fn left_bar_button_item(self, item: BarButtonItem) -> Self;

    fn left_bar_button_items(self, items: Vec<BarButtonItem>) -> Self;

    /// Replace the trailing items with a single item
    fn right_bar_button_item(self, item: BarButtonItem) -> Self;

    fn right_bar_button_items(self, items: Vec<BarButtonItem>) -> Self;

    fn back_bar_button_item(self, item: BarButtonItem) -> Self;

    fn hides_back_button(self, hides: bool) -> Self;

    fn hides_back_button_animated(self, hides: bool, animated: bool) -> Self;

    fn search_controller(self, controller: SearchController) -> Self;
}

impl<'a, B> NavigationItemSetterExt for Setter<'a, B>
where
    B: AsMut<NavigationItem> + ?Sized,
{
    fn title_view(mut self, view: impl Widget) -> Self {
        target_mut::<NavigationItem, _>(&mut self).title_view = Some(Box::new(view));
        self
    }

    fn left_bar_button_item(self, item: BarButtonItem) -> Self {
        self.left_bar_button_items(vec![item])
    }

    fn left_bar_button_items(mut self, items: Vec<BarButtonItem>) -> Self {
        target_mut::<NavigationItem, _>(&mut self).left_bar_button_items = items;
        self
    }

    fn right_bar_button_item(self, item: BarButtonItem) -> Self {
        self.right_bar_button_items(vec![item])
    }

    fn right_bar_button_items(mut self, items: Vec<BarButtonItem>) -> Self {
        target_mut::<NavigationItem, _>(&mut self).right_bar_button_items = items;
        self
    }

    fn back_bar_button_item(mut self, item: BarButtonItem) -> Self {
        target_mut::<NavigationItem, _>(&mut self).back_bar_button_item = Some(item);
        self
    }

    fn hides_back_button(mut self, hides: bool) -> Self {
        target_mut::<NavigationItem, _>(&mut self).hides_back_button = hides;
        self
    }

    fn hides_back_button_animated(self, hides: bool, animated: bool) -> Self {
        tracing::trace!(
            target: "setkit::setter",
            widget = "NavigationItem",
            hides,
            animated
        );
        self.hides_back_button(hides)
    }

    fn search_controller(mut self, controller: SearchController) -> Self {
        target_mut::<NavigationItem, _>(&mut self).search_controller = Some(Box::new(controller));
        self
    }
}
