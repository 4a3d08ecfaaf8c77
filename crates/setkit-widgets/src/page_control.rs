//! Row of page dots

use crate::control::Control;
use crate::view::View;
use setkit_core::types::Color;
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageControlBackgroundStyle {
    #[default]
    Automatic,
    Prominent,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageControlDirection {
    #[default]
    Natural,
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

#[derive(Debug, Clone, Default, Setters)]
pub struct PageControl {
    #[set(parent, ancestors(View))]
    pub control: Control,
    pub current_page: usize,
    pub number_of_pages: usize,
    #[set(strip_option)]
    pub page_indicator_tint_color: Option<Color>,
    #[set(strip_option)]
    pub current_page_indicator_tint_color: Option<Color>,
    pub hides_for_single_page: bool,
    pub background_style: PageControlBackgroundStyle,
    pub direction: PageControlDirection,
}

impl PageControl {
    /// Whether the dots are drawn at all
    pub fn is_visible(&self) -> bool {
        !self.control.view.hidden && !(self.hides_for_single_page && self.number_of_pages <= 1)
    }
}
