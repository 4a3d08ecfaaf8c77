//! Bar appearance descriptors
//!
//! A [`BarAppearance`] bundles the background, shadow and title styling a
//! bar uses in one layout state (standard, compact, or scrolled to the edge).
//! Bars hold up to four of them; the setters that install appearances are
//! compiled only with the `appearance` feature.

use crate::widget::target_mut;
use setkit_core::setter::{Settable, Setter};
use setkit_core::types::{Color, Font, Image, Offset};
use setkit_macros::Setters;

/// Styling applied to titles and item labels
#[derive(Debug, Clone, Default, PartialEq, Setters)]
pub struct TextAttributes {
    #[set(strip_option)]
    pub font: Option<Font>,
    #[set(strip_option)]
    pub foreground_color: Option<Color>,
    #[set(strip_option)]
    pub background_color: Option<Color>,
    /// Extra spacing between characters
    pub kern: f32,
    pub underline: bool,
    pub strikethrough: bool,
    #[set(strip_option)]
    pub shadow_color: Option<Color>,
    pub shadow_offset: Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurEffect {
    ExtraLight,
    Light,
    Dark,
    #[default]
    SystemChrome,
    SystemMaterial,
    SystemThinMaterial,
}

#[derive(Debug, Clone, Default, PartialEq, Setters)]
pub struct BarAppearance {
    #[set(strip_option)]
    pub background_color: Option<Color>,
    #[set(strip_option)]
    pub background_image: Option<Image>,
    #[set(strip_option)]
    pub background_effect: Option<BlurEffect>,
    #[set(strip_option)]
    pub shadow_color: Option<Color>,
    #[set(strip_option)]
    pub shadow_image: Option<Image>,
    pub title_text_attributes: TextAttributes,
    pub large_title_text_attributes: TextAttributes,
    pub button_text_attributes: TextAttributes,
}

impl BarAppearance {
    /// Opaque system background with a hairline shadow
    pub fn opaque() -> Self {
        let mut appearance = Self::default();
        appearance.configure_with_opaque_background();
        appearance
    }

    /// No background and no shadow
    pub fn transparent() -> Self {
        let mut appearance = Self::default();
        appearance.configure_with_transparent_background();
        appearance
    }

    pub fn configure_with_opaque_background(&mut self) {
        self.background_color = Some(Color::WHITE);
        self.background_effect = None;
        self.shadow_color = Some(Color::BLACK.with_alpha(0.3));
    }

    pub fn configure_with_default_background(&mut self) {
        self.background_color = None;
        self.background_effect = Some(BlurEffect::SystemChrome);
        self.shadow_color = Some(Color::BLACK.with_alpha(0.3));
    }

    pub fn configure_with_transparent_background(&mut self) {
        self.background_color = Some(Color::CLEAR);
        self.background_effect = None;
        self.shadow_color = None;
        self.shadow_image = None;
    }
}

pub trait BarAppearanceSetterExt: Sized {
    fn opaque_background(self) -> Self;

    fn default_background(self) -> Self;

    fn transparent_background(self) -> Self;

    /// Configure the title text attributes inline
    fn title_attributes_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TextAttributes>);

    /// Configure the large title text attributes inline
    fn large_title_attributes_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TextAttributes>);
}

impl<'a, B> BarAppearanceSetterExt for Setter<'a, B>
where
    B: AsMut<BarAppearance> + ?Sized,
{
    fn opaque_background(mut self) -> Self {
        target_mut::<BarAppearance, _>(&mut self).configure_with_opaque_background();
        self
    }

    fn default_background(mut self) -> Self {
        target_mut::<BarAppearance, _>(&mut self).configure_with_default_background();
        self
    }

    fn transparent_background(mut self) -> Self {
        target_mut::<BarAppearance, _>(&mut self).configure_with_transparent_background();
        self
    }

    fn title_attributes_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TextAttributes>),
    {
        configure(target_mut::<BarAppearance, _>(&mut self).title_text_attributes.set());
        self
    }

    fn large_title_attributes_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TextAttributes>),
    {
        configure(
            target_mut::<BarAppearance, _>(&mut self)
                .large_title_text_attributes
                .set(),
        );
        self
    }
}
