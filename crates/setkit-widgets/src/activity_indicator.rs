//! Spinning activity indicator

use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_core::types::Color;
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityIndicatorStyle {
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Setters)]
pub struct ActivityIndicator {
    #[set(parent)]
    pub view: View,
    /// Hide the view whenever the animation stops
    pub hides_when_stopped: bool,
    #[set(strip_option)]
    pub color: Option<Color>,
    pub style: ActivityIndicatorStyle,
    #[set(skip)]
    animating: bool,
}

impl Default for ActivityIndicator {
    fn default() -> Self {
        let mut view = View::default();
        view.hidden = true;
        Self {
            view,
            hides_when_stopped: true,
            color: None,
            style: ActivityIndicatorStyle::default(),
            animating: false,
        }
    }
}

impl ActivityIndicator {
    pub fn start_animating(&mut self) {
        self.animating = true;
        if self.hides_when_stopped {
            self.view.hidden = false;
        }
    }

    pub fn stop_animating(&mut self) {
        self.animating = false;
        if self.hides_when_stopped {
            self.view.hidden = true;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

pub trait ActivityIndicatorSetterExt: Sized {
    /// Start when `true`, stop when `false`
    fn animating(self, animating: bool) -> Self;
}

impl<'a, B> ActivityIndicatorSetterExt for Setter<'a, B>
where
    B: AsMut<ActivityIndicator> + ?Sized,
{
    fn animating(mut self, animating: bool) -> Self {
        let indicator = target_mut::<ActivityIndicator, _>(&mut self);
        if animating {
            indicator.start_animating();
        } else {
            indicator.stop_animating();
        }
        self
    }
}
