//! Determinate progress bar

use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_core::types::{Color, Image};
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressViewStyle {
    #[default]
    Default,
    Bar,
}

#[derive(Debug, Clone, Default, Setters)]
pub struct ProgressView {
    #[set(parent)]
    pub view: View,
    /// Fraction complete; not clamped here
    pub progress: f32,
    #[set(strip_option)]
    pub progress_tint_color: Option<Color>,
    #[set(strip_option)]
    pub track_tint_color: Option<Color>,
    #[set(strip_option)]
    pub progress_image: Option<Image>,
    #[set(strip_option)]
    pub track_image: Option<Image>,
    pub style: ProgressViewStyle,
}

pub trait ProgressViewSetterExt: Sized {
    fn progress_animated(self, progress: f32, animated: bool) -> Self;
}

impl<'a, B> ProgressViewSetterExt for Setter<'a, B>
where
    B: AsMut<ProgressView> + ?Sized,
{
    fn progress_animated(mut self, progress: f32, animated: bool) -> Self {
        target_mut::<ProgressView, _>(&mut self).progress = progress;
        tracing::trace!(target: "setkit::setter", widget = "ProgressView", progress, animated);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setkit_core::setter::Settable;

    #[test]
    fn test_progress_is_not_clamped() {
        let mut progress = ProgressView::default();
        progress.set().progress(1.5).track_tint_color(Color::SYSTEM_GRAY);
        assert_eq!(progress.progress, 1.5);

        progress.set().progress_animated(0.25, true);
        assert_eq!(progress.progress, 0.25);
        assert_eq!(progress.track_tint_color, Some(Color::SYSTEM_GRAY));
    }
}
