//! Bar showing the navigation item stack

use crate::appearance::{BarAppearance, TextAttributes};
use crate::bar_item::BarStyle;
use crate::navigation_item::NavigationItem;
use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_core::types::{Color, Image};
use setkit_macros::Setters;

#[derive(Debug, Clone, Setters)]
pub struct NavigationBar {
    #[set(parent)]
    pub view: View,
    pub translucent: bool,
    pub bar_style: BarStyle,
    #[set(strip_option)]
    pub bar_tint_color: Option<Color>,
    pub prefers_large_titles: bool,
    pub title_text_attributes: TextAttributes,
    pub large_title_text_attributes: TextAttributes,
    #[set(strip_option)]
    pub shadow_image: Option<Image>,
    #[set(strip_option)]
    pub background_image: Option<Image>,
    #[set(strip_option)]
    pub back_indicator_image: Option<Image>,
    #[set(strip_option)]
    pub back_indicator_transition_mask_image: Option<Image>,
    #[set(feature = "appearance")]
    pub standard_appearance: BarAppearance,
    #[set(strip_option, feature = "appearance")]
    pub compact_appearance: Option<BarAppearance>,
    #[set(strip_option, feature = "appearance")]
    pub scroll_edge_appearance: Option<BarAppearance>,
    #[set(strip_option, feature = "appearance")]
    pub compact_scroll_edge_appearance: Option<BarAppearance>,
    #[set(skip)]
    items: Vec<NavigationItem>,
}

impl Default for NavigationBar {
    fn default() -> Self {
        Self {
            view: View::default(),
            translucent: true,
            bar_style: BarStyle::Default,
            bar_tint_color: None,
            prefers_large_titles: false,
            title_text_attributes: TextAttributes::default(),
            large_title_text_attributes: TextAttributes::default(),
            shadow_image: None,
            background_image: None,
            back_indicator_image: None,
            back_indicator_transition_mask_image: None,
            standard_appearance: BarAppearance::default(),
            compact_appearance: None,
            scroll_edge_appearance: None,
            compact_scroll_edge_appearance: None,
            items: Vec::new(),
        }
    }
}

impl NavigationBar {
    /// Navigation items, bottom of the stack first
    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn top_item(&self) -> Option<&NavigationItem> {
        self.items.last()
    }

    /// Item one level below the top, whose title backs the back button
    pub fn back_item(&self) -> Option<&NavigationItem> {
        self.items.iter().rev().nth(1)
    }

    pub fn set_items(&mut self, items: Vec<NavigationItem>) {
        self.items = items;
    }

    pub fn push_item(&mut self, item: NavigationItem) {
        self.items.push(item);
    }

    pub fn pop_item(&mut self) -> Option<NavigationItem> {
        self.items.pop()
    }

    /// Appearance in effect for a compact bar scrolled to the content edge
    ///
    /// Falls back through the less specific appearances to the standard one.
    pub fn resolved_appearance(&self, compact: bool, at_scroll_edge: bool) -> &BarAppearance {
        let candidates = [
            (compact && at_scroll_edge, self.compact_scroll_edge_appearance.as_ref()),
            (at_scroll_edge, self.scroll_edge_appearance.as_ref()),
            (compact, self.compact_appearance.as_ref()),
        ];
        candidates
            .into_iter()
            .find_map(|(applies, appearance)| appearance.filter(|_| applies))
            .unwrap_or(&self.standard_appearance)
    }
}

pub trait NavigationBarSetterExt: Sized {
    /// Replace the item stack
    fn items(self, items: Vec<NavigationItem>) -> Self;

    fn items_animated(self, items: Vec<NavigationItem>, animated: bool) -> Self;
}

impl<'a, B> NavigationBarSetterExt for Setter<'a, B>
where
    B: AsMut<NavigationBar> + ?Sized,
{
    fn items(mut self, items: Vec<NavigationItem>) -> Self {
        target_mut::<NavigationBar, _>(&mut self).set_items(items);
        self
    }

    fn items_animated(mut self, items: Vec<NavigationItem>, animated: bool) -> Self {
        let bar = target_mut::<NavigationBar, _>(&mut self);
        tracing::trace!(
            target: "setkit::setter",
            widget = "NavigationBar",
            count = items.len(),
            animated
        );
        bar.set_items(items);
        self
    }
}
