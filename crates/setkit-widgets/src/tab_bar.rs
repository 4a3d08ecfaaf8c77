//! Bar of tab items

use crate::appearance::BarAppearance;
use crate::bar_item::{BarStyle, TabBarItem};
use crate::view::View;
use setkit_core::types::Color;
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemPositioning {
    #[default]
    Automatic,
    Fill,
    Centered,
}

#[derive(Debug, Clone, Setters)]
pub struct TabBar {
    #[set(parent)]
    pub view: View,
    pub items: Vec<TabBarItem>,
    /// Index into `items`
    #[set(strip_option)]
    pub selected_item: Option<usize>,
    pub translucent: bool,
    pub bar_style: BarStyle,
    #[set(strip_option)]
    pub bar_tint_color: Option<Color>,
    #[set(strip_option)]
    pub unselected_item_tint_color: Option<Color>,
    pub item_positioning: ItemPositioning,
    pub item_spacing: f32,
    pub item_width: f32,
    #[set(feature = "appearance")]
    pub standard_appearance: BarAppearance,
    #[set(strip_option, feature = "appearance")]
    pub scroll_edge_appearance: Option<BarAppearance>,
}

impl Default for TabBar {
    fn default() -> Self {
        Self {
            view: View::default(),
            items: Vec::new(),
            selected_item: None,
            translucent: true,
            bar_style: BarStyle::Default,
            bar_tint_color: None,
            unselected_item_tint_color: None,
            item_positioning: ItemPositioning::Automatic,
            item_spacing: 0.0,
            item_width: 0.0,
            standard_appearance: BarAppearance::default(),
            scroll_edge_appearance: None,
        }
    }
}

impl TabBar {
    pub fn selected(&self) -> Option<&TabBarItem> {
        self.selected_item.and_then(|index| self.items.get(index))
    }
}
