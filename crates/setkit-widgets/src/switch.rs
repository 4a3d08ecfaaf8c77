//! On/off switch

use crate::control::{Control, ControlEvents};
use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_core::types::{Color, Image};
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchStyle {
    #[default]
    Automatic,
    Checkbox,
    Sliding,
}

#[derive(Debug, Clone, Default, Setters)]
pub struct Switch {
    #[set(parent, ancestors(View))]
    pub control: Control,
    pub on: bool,
    #[set(strip_option)]
    pub on_tint_color: Option<Color>,
    #[set(strip_option)]
    pub thumb_tint_color: Option<Color>,
    #[set(strip_option)]
    pub on_image: Option<Image>,
    #[set(strip_option)]
    pub off_image: Option<Image>,
    #[set(into, strip_option)]
    pub title: Option<String>,
    pub preferred_style: SwitchStyle,
}

impl Switch {
    /// Flip the switch as a user would, notifying value-changed targets
    pub fn toggle(&mut self) {
        self.on = !self.on;
        self.control.send_actions(ControlEvents::VALUE_CHANGED);
    }
}

pub trait SwitchSetterExt: Sized {
    fn on_animated(self, on: bool, animated: bool) -> Self;
}

impl<'a, B> SwitchSetterExt for Setter<'a, B>
where
    B: AsMut<Switch> + ?Sized,
{
    fn on_animated(mut self, on: bool, animated: bool) -> Self {
        target_mut::<Switch, _>(&mut self).on = on;
        tracing::trace!(target: "setkit::setter", widget = "Switch", on, animated);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlSetterExt;
    use crate::widget::Action;
    use setkit_core::setter::Settable;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_toggle_notifies_value_changed() {
        let changes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&changes);
        let mut switch = Switch::default();
        switch
            .set()
            .on_tint_color(Color::SYSTEM_GREEN)
            .target(
                ControlEvents::VALUE_CHANGED,
                Action::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .on_animated(true, false);

        assert!(switch.on);
        switch.toggle();
        assert!(!switch.on);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }
}
