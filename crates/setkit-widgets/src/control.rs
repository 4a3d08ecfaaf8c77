//! Controls: views that turn touches into actions
//!
//! A [`Control`] keeps an ordered list of event targets. Setters register and
//! remove them; [`Control::send_actions`] fires them.

use crate::view::View;
use crate::widget::{target_mut, Action};
use bitflags::bitflags;
use setkit_core::setter::Setter;
use setkit_macros::Setters;

bitflags! {
    /// Events a control target can listen for
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControlEvents: u32 {
        const TOUCH_DOWN = 1 << 0;
        const TOUCH_DOWN_REPEAT = 1 << 1;
        const TOUCH_DRAG_INSIDE = 1 << 2;
        const TOUCH_DRAG_OUTSIDE = 1 << 3;
        const TOUCH_UP_INSIDE = 1 << 6;
        const TOUCH_UP_OUTSIDE = 1 << 7;
        const TOUCH_CANCEL = 1 << 8;
        const VALUE_CHANGED = 1 << 12;
        const PRIMARY_ACTION_TRIGGERED = 1 << 13;
        const EDITING_DID_BEGIN = 1 << 16;
        const EDITING_CHANGED = 1 << 17;
        const EDITING_DID_END = 1 << 18;
        const EDITING_DID_END_ON_EXIT = 1 << 19;

        const ALL_TOUCH_EVENTS = 0x0000_0fff;
        const ALL_EDITING_EVENTS = 0x000f_0000;
    }
}

/// State a per-state property is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlState {
    #[default]
    Normal,
    Highlighted,
    Disabled,
    Selected,
    Focused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentHorizontalAlignment {
    #[default]
    Center,
    Left,
    Right,
    Fill,
    Leading,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentVerticalAlignment {
    #[default]
    Center,
    Top,
    Bottom,
    Fill,
}

/// Action registered for a set of events
#[derive(Debug, Clone)]
pub struct Target {
    pub events: ControlEvents,
    pub action: Action,
}

/// Base of every interactive widget
#[derive(Debug, Clone, Setters)]
pub struct Control {
    #[set(parent)]
    pub view: View,
    pub enabled: bool,
    pub selected: bool,
    pub highlighted: bool,
    pub content_horizontal_alignment: ContentHorizontalAlignment,
    pub content_vertical_alignment: ContentVerticalAlignment,
    /// Present the attached menu on a plain tap instead of a long press
    #[set(feature = "menus")]
    pub shows_menu_as_primary_action: bool,
    pub context_menu_interaction_enabled: bool,
    #[set(skip)]
    targets: Vec<Target>,
}

impl Default for Control {
    fn default() -> Self {
        Self {
            view: View::default(),
            enabled: true,
            selected: false,
            highlighted: false,
            content_horizontal_alignment: ContentHorizontalAlignment::default(),
            content_vertical_alignment: ContentVerticalAlignment::default(),
            shows_menu_as_primary_action: false,
            context_menu_interaction_enabled: false,
            targets: Vec::new(),
        }
    }
}

impl Control {
    /// The control's state for per-state lookups
    pub fn state(&self) -> ControlState {
        if !self.enabled {
            ControlState::Disabled
        } else if self.highlighted {
            ControlState::Highlighted
        } else if self.selected {
            ControlState::Selected
        } else {
            ControlState::Normal
        }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn add_target(&mut self, events: ControlEvents, action: Action) {
        self.targets.push(Target { events, action });
    }

    /// Remove every target listening for any of `events`
    ///
    /// Targets registered for several events stop listening to the removed
    /// ones and stay registered for the rest.
    pub fn remove_targets(&mut self, events: ControlEvents) {
        for target in &mut self.targets {
            target.events.remove(events);
        }
        self.targets.retain(|target| !target.events.is_empty());
    }

    /// Fire every action registered for any of `events`, in registration order
    ///
    /// Returns how many actions ran. Disabled controls send nothing.
    pub fn send_actions(&self, events: ControlEvents) -> usize {
        if !self.enabled {
            return 0;
        }
        let mut sent = 0;
        for target in self.targets.iter().filter(|t| t.events.intersects(events)) {
            target.action.call();
            sent += 1;
        }
        tracing::trace!(target: "setkit::widgets", ?events, sent, "send actions");
        sent
    }
}

/// Target-action setters for every control family
pub trait ControlSetterExt: Sized {
    /// Run `action` on touch-up-inside
    fn tap(self, action: Action) -> Self;

    /// Run `action` for each of `events`
    fn target(self, events: ControlEvents, action: Action) -> Self;

    /// Stop listening for `events`
    fn remove_targets(self, events: ControlEvents) -> Self;
}

impl<'a, B> ControlSetterExt for Setter<'a, B>
where
    B: AsMut<Control> + ?Sized,
{
    fn tap(self, action: Action) -> Self {
        self.target(ControlEvents::TOUCH_UP_INSIDE, action)
    }

    fn target(mut self, events: ControlEvents, action: Action) -> Self {
        target_mut::<Control, _>(&mut self).add_target(events, action);
        self
    }

    fn remove_targets(mut self, events: ControlEvents) -> Self {
        target_mut::<Control, _>(&mut self).remove_targets(events);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewSetters;
    use setkit_core::setter::Settable;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_action(counter: &Arc<AtomicUsize>) -> Action {
        let counter = Arc::clone(counter);
        Action::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_tap_fires_on_touch_up_inside() {
        let taps = Arc::new(AtomicUsize::new(0));
        let mut control = Control::default();
        control.set().tap(counting_action(&taps));

        assert_eq!(control.send_actions(ControlEvents::TOUCH_DOWN), 0);
        assert_eq!(control.send_actions(ControlEvents::TOUCH_UP_INSIDE), 1);
        assert_eq!(taps.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_targets_keeps_other_events() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut control = Control::default();
        control
            .set()
            .target(
                ControlEvents::VALUE_CHANGED | ControlEvents::EDITING_CHANGED,
                counting_action(&hits),
            )
            .tap(counting_action(&hits))
            .remove_targets(ControlEvents::VALUE_CHANGED | ControlEvents::TOUCH_UP_INSIDE);

        assert_eq!(control.targets().len(), 1);
        assert_eq!(control.send_actions(ControlEvents::VALUE_CHANGED), 0);
        assert_eq!(control.send_actions(ControlEvents::EDITING_CHANGED), 1);
    }

    #[test]
    fn test_disabled_control_sends_nothing() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut control = Control::default();
        control.set().tap(counting_action(&hits)).enabled(false);

        assert_eq!(control.send_actions(ControlEvents::TOUCH_UP_INSIDE), 0);
        assert_eq!(control.state(), ControlState::Disabled);
    }

    #[test]
    fn test_control_inherits_view_setters() {
        let mut control = Control::default();
        control.set().selected(true).alpha(0.5).highlighted(true);

        assert_eq!(control.view.alpha, 0.5);
        assert_eq!(control.state(), ControlState::Highlighted);
    }
}
