//! Scrollable viewport over a larger content area

use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_core::types::{EdgeInsets, Point, Size};
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    #[default]
    Default,
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardDismissMode {
    #[default]
    None,
    OnDrag,
    Interactive,
}

/// Deceleration applied when a fling ends
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DecelerationRate {
    #[default]
    Normal,
    Fast,
    Custom(f32),
}

impl DecelerationRate {
    pub fn value(self) -> f32 {
        match self {
            Self::Normal => 0.998,
            Self::Fast => 0.99,
            Self::Custom(rate) => rate,
        }
    }
}

#[derive(Debug, Clone, Setters)]
pub struct ScrollView {
    #[set(parent)]
    pub view: View,
    pub content_offset: Point,
    pub content_inset: EdgeInsets,
    pub content_size: Size,
    pub bounces: bool,
    pub always_bounce_vertical: bool,
    pub always_bounce_horizontal: bool,
    pub shows_vertical_scroll_indicator: bool,
    pub shows_horizontal_scroll_indicator: bool,
    pub indicator_style: IndicatorStyle,
    pub keyboard_dismiss_mode: KeyboardDismissMode,
    pub deceleration_rate: DecelerationRate,
    pub minimum_zoom_scale: f32,
    pub maximum_zoom_scale: f32,
    pub zoom_scale: f32,
    pub bounces_zoom: bool,
    pub scrolls_to_top: bool,
    pub paging_enabled: bool,
    #[set(skip)]
    scroll_enabled: bool,
    #[set(skip)]
    directional_lock_enabled: bool,
}

impl Default for ScrollView {
    fn default() -> Self {
        Self {
            view: View::default(),
            content_offset: Point::zero(),
            content_inset: EdgeInsets::default(),
            content_size: Size::zero(),
            bounces: true,
            always_bounce_vertical: false,
            always_bounce_horizontal: false,
            shows_vertical_scroll_indicator: true,
            shows_horizontal_scroll_indicator: true,
            indicator_style: IndicatorStyle::Default,
            keyboard_dismiss_mode: KeyboardDismissMode::None,
            deceleration_rate: DecelerationRate::Normal,
            minimum_zoom_scale: 1.0,
            maximum_zoom_scale: 1.0,
            zoom_scale: 1.0,
            bounces_zoom: true,
            scrolls_to_top: true,
            paging_enabled: false,
            scroll_enabled: true,
            directional_lock_enabled: false,
        }
    }
}

impl ScrollView {
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn is_directional_lock_enabled(&self) -> bool {
        self.directional_lock_enabled
    }

    /// Zoom scale pinned into the configured minimum/maximum range
    ///
    /// A NaN bound disables pinning and the scale passes through unchanged.
    pub fn clamped_zoom_scale(&self, scale: f32) -> f32 {
        let (minimum, maximum) = (self.minimum_zoom_scale, self.maximum_zoom_scale);
        if minimum.is_nan() || maximum.is_nan() {
            return scale;
        }
        scale.clamp(minimum, maximum.max(minimum))
    }
}

/// Flag and animated setters for scroll views
///
/// Scrolling and directional lock are toggled through paired
/// argument-free methods instead of boolean setters.
pub trait ScrollViewSetterExt: Sized {
    fn scroll_enabled(self) -> Self;

    fn scroll_disabled(self) -> Self;

    fn directional_lock_enabled(self) -> Self;

    fn directional_lock_disabled(self) -> Self;

    fn content_offset_animated(self, offset: Point, animated: bool) -> Self;

    /// Zoom, pinned into the minimum/maximum zoom range
    fn zoom_scale_animated(self, scale: f32, animated: bool) -> Self;
}

impl<'a, B> ScrollViewSetterExt for Setter<'a, B>
where
    B: AsMut<ScrollView> + ?Sized,
{
    fn scroll_enabled(mut self) -> Self {
        target_mut::<ScrollView, _>(&mut self).scroll_enabled = true;
        self
    }

    fn scroll_disabled(mut self) -> Self {
        target_mut::<ScrollView, _>(&mut self).scroll_enabled = false;
        self
    }

    fn directional_lock_enabled(mut self) -> Self {
        target_mut::<ScrollView, _>(&mut self).directional_lock_enabled = true;
        self
    }

    fn directional_lock_disabled(mut self) -> Self {
        target_mut::<ScrollView, _>(&mut self).directional_lock_enabled = false;
        self
    }

    fn content_offset_animated(mut self, offset: Point, animated: bool) -> Self {
        target_mut::<ScrollView, _>(&mut self).content_offset = offset;
        tracing::trace!(
            target: "setkit::setter",
            widget = "ScrollView",
            x = offset.x,
            y = offset.y,
            animated
        );
        self
    }

    fn zoom_scale_animated(mut self, scale: f32, animated: bool) -> Self {
        let scroll = target_mut::<ScrollView, _>(&mut self);
        scroll.zoom_scale = scroll.clamped_zoom_scale(scale);
        tracing::trace!(target: "setkit::setter", widget = "ScrollView", scale, animated);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewSetters;
    use setkit_core::setter::Settable;

    #[test]
    fn test_paired_flag_setters() {
        let mut scroll = ScrollView::default();
        assert!(scroll.is_scroll_enabled());

        scroll.set().scroll_disabled().directional_lock_enabled();
        assert!(!scroll.is_scroll_enabled());
        assert!(scroll.is_directional_lock_enabled());

        scroll.set().scroll_enabled().directional_lock_disabled();
        assert!(scroll.is_scroll_enabled());
        assert!(!scroll.is_directional_lock_enabled());
    }

    #[test]
    fn test_zoom_is_clamped_when_animated() {
        let mut scroll = ScrollView::default();
        scroll
            .set()
            .minimum_zoom_scale(0.5)
            .maximum_zoom_scale(3.0)
            .zoom_scale_animated(5.0, true);
        assert_eq!(scroll.zoom_scale, 3.0);

        scroll.set().zoom_scale_animated(0.1, false);
        assert_eq!(scroll.zoom_scale, 0.5);
    }

    #[test]
    fn test_content_and_inherited_setters() {
        let mut scroll = ScrollView::default();
        scroll
            .set()
            .content_size(Size::new(320.0, 2000.0))
            .content_offset_animated(Point::new(0.0, 400.0), true)
            .deceleration_rate(DecelerationRate::Fast)
            .paging_enabled(true)
            .clips_to_bounds(true);

        assert_eq!(scroll.content_offset, Point::new(0.0, 400.0));
        assert_eq!(scroll.content_size, Size::new(320.0, 2000.0));
        assert_eq!(scroll.deceleration_rate.value(), 0.99);
        assert!(scroll.paging_enabled);
        assert!(scroll.view.clips_to_bounds);
    }

    #[test]
    fn test_nan_zoom_bound_passes_scale_through() {
        let mut scroll = ScrollView::default();
        scroll
            .set()
            .minimum_zoom_scale(f32::NAN)
            .zoom_scale_animated(2.0, false);
        assert_eq!(scroll.zoom_scale, 2.0);
    }
}
