//! Bottom bar of bar button items

use crate::appearance::BarAppearance;
use crate::bar_item::{BarButtonItem, BarStyle};
use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_core::types::Color;
use setkit_macros::Setters;

#[derive(Debug, Clone, Setters)]
pub struct Toolbar {
    #[set(parent)]
    pub view: View,
    pub items: Vec<BarButtonItem>,
    pub translucent: bool,
    pub bar_style: BarStyle,
    #[set(strip_option)]
    pub bar_tint_color: Option<Color>,
    #[set(feature = "appearance")]
    pub standard_appearance: BarAppearance,
    #[set(strip_option, feature = "appearance")]
    pub compact_appearance: Option<BarAppearance>,
    #[set(strip_option, feature = "appearance")]
    pub scroll_edge_appearance: Option<BarAppearance>,
    #[set(strip_option, feature = "appearance")]
    pub compact_scroll_edge_appearance: Option<BarAppearance>,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            view: View::default(),
            items: Vec::new(),
            translucent: true,
            bar_style: BarStyle::Default,
            bar_tint_color: None,
            standard_appearance: BarAppearance::default(),
            compact_appearance: None,
            scroll_edge_appearance: None,
            compact_scroll_edge_appearance: None,
        }
    }
}

pub trait ToolbarSetterExt: Sized {
    fn items_animated(self, items: Vec<BarButtonItem>, animated: bool) -> Self;
}

impl<'a, B> ToolbarSetterExt for Setter<'a, B>
where
    B: AsMut<Toolbar> + ?Sized,
{
    fn items_animated(mut self, items: Vec<BarButtonItem>, animated: bool) -> Self {
        let toolbar = target_mut::<Toolbar, _>(&mut self);
        tracing::trace!(
            target: "setkit::setter",
            widget = "Toolbar",
            count = items.len(),
            animated
        );
        toolbar.items = items;
        self
    }
}
