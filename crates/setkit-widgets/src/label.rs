//! Read-only text

use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_core::types::{Color, Font, TextAlignment};
use setkit_macros::Setters;

/// How text that does not fit is wrapped or truncated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreakMode {
    WordWrap,
    CharWrap,
    Clip,
    TruncateHead,
    #[default]
    TruncateTail,
    TruncateMiddle,
}

#[derive(Debug, Clone, Setters)]
pub struct Label {
    #[set(parent)]
    pub view: View,
    #[set(into, strip_option)]
    pub text: Option<String>,
    pub font: Font,
    pub text_color: Color,
    pub text_alignment: TextAlignment,
    /// Maximum line count; zero means unlimited
    pub number_of_lines: usize,
    pub line_break_mode: LineBreakMode,
    pub enabled: bool,
    pub highlighted: bool,
    #[set(strip_option)]
    pub highlighted_text_color: Option<Color>,
    pub adjusts_font_size_to_fit_width: bool,
    pub minimum_scale_factor: f32,
    pub preferred_max_layout_width: f32,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            view: View::default(),
            text: None,
            font: Font::default(),
            text_color: Color::BLACK,
            text_alignment: TextAlignment::default(),
            number_of_lines: 1,
            line_break_mode: LineBreakMode::default(),
            enabled: true,
            highlighted: false,
            highlighted_text_color: None,
            adjusts_font_size_to_fit_width: false,
            minimum_scale_factor: 0.0,
            preferred_max_layout_width: 0.0,
        }
    }
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

pub trait LabelSetterExt: Sized {
    /// Keep the font family and weight, change the size
    fn font_size(self, size: f32) -> Self;

    /// Unlimited line count
    fn multiline(self) -> Self;
}

impl<'a, B> LabelSetterExt for Setter<'a, B>
where
    B: AsMut<Label> + ?Sized,
{
    fn font_size(mut self, size: f32) -> Self {
        let label = target_mut::<Label, _>(&mut self);
        label.font = label.font.with_size(size);
        self
    }

    fn multiline(mut self) -> Self {
        target_mut::<Label, _>(&mut self).number_of_lines = 0;
        self
    }
}
