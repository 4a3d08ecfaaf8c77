//! Static and animated images

use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_core::types::Image;
use setkit_macros::Setters;

#[derive(Debug, Clone, Setters)]
pub struct ImageView {
    #[set(parent)]
    pub view: View,
    #[set(strip_option)]
    pub image: Option<Image>,
    #[set(strip_option)]
    pub highlighted_image: Option<Image>,
    /// Frames cycled through while animating
    pub animation_images: Vec<Image>,
    /// Seconds for one cycle through `animation_images`
    pub animation_duration: f64,
    /// Zero repeats forever
    pub animation_repeat_count: u32,
    pub highlighted: bool,
    #[set(skip)]
    animating: bool,
}

impl Default for ImageView {
    fn default() -> Self {
        let mut view = View::default();
        view.user_interaction_enabled = false;
        Self {
            view,
            image: None,
            highlighted_image: None,
            animation_images: Vec::new(),
            animation_duration: 0.0,
            animation_repeat_count: 0,
            highlighted: false,
            animating: false,
        }
    }
}

impl ImageView {
    pub fn new(image: Image) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    pub fn start_animating(&mut self) {
        self.animating = true;
    }

    pub fn stop_animating(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Image shown right now
    pub fn current_image(&self) -> Option<&Image> {
        if self.highlighted {
            self.highlighted_image.as_ref().or(self.image.as_ref())
        } else {
            self.image.as_ref()
        }
    }
}

pub trait ImageViewSetterExt: Sized {
    /// Start or stop cycling `animation_images`
    fn animating(self, animating: bool) -> Self;

    fn start_animating(self) -> Self;

    fn stop_animating(self) -> Self;
}

impl<'a, B> ImageViewSetterExt for Setter<'a, B>
where
    B: AsMut<ImageView> + ?Sized,
{
    fn animating(self, animating: bool) -> Self {
        if animating {
            self.start_animating()
        } else {
            self.stop_animating()
        }
    }

    fn start_animating(mut self) -> Self {
        target_mut::<ImageView, _>(&mut self).start_animating();
        self
    }

    fn stop_animating(mut self) -> Self {
        target_mut::<ImageView, _>(&mut self).stop_animating();
        self
    }
}
