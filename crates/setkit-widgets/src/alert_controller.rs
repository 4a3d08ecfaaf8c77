//! Alerts and action sheets

use crate::text_field::TextField;
use crate::view_controller::ViewController;
use crate::widget::{target_mut, Action};
use setkit_core::setter::{Settable, Setter};
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertActionStyle {
    #[default]
    Default,
    Cancel,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertControllerStyle {
    ActionSheet,
    #[default]
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertSeverity {
    #[default]
    Default,
    Critical,
}

/// Button of an alert
#[derive(Debug, Clone, Setters)]
pub struct AlertAction {
    #[set(into, strip_option)]
    pub title: Option<String>,
    pub style: AlertActionStyle,
    pub enabled: bool,
    #[set(strip_option)]
    pub handler: Option<Action>,
}

impl AlertAction {
    pub fn new(title: impl Into<String>, style: AlertActionStyle) -> Self {
        Self {
            title: Some(title.into()),
            style,
            enabled: true,
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: Action) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Run the handler of an enabled action
    pub fn perform(&self) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some(handler) = &self.handler {
            handler.call();
        }
        true
    }
}

#[derive(Debug, Clone, Default, Setters)]
pub struct AlertController {
    #[set(parent)]
    pub view_controller: ViewController,
    #[set(into, strip_option)]
    pub message: Option<String>,
    pub preferred_style: AlertControllerStyle,
    pub severity: AlertSeverity,
    #[set(skip)]
    actions: Vec<AlertAction>,
    #[set(skip)]
    preferred_action: Option<usize>,
    #[set(skip)]
    text_fields: Vec<TextField>,
}

impl AlertController {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        preferred_style: AlertControllerStyle,
    ) -> Self {
        Self {
            view_controller: ViewController::new(title),
            message: Some(message.into()),
            preferred_style,
            ..Self::default()
        }
    }

    pub fn actions(&self) -> &[AlertAction] {
        &self.actions
    }

    pub fn preferred_action(&self) -> Option<&AlertAction> {
        self.preferred_action.and_then(|index| self.actions.get(index))
    }

    pub fn text_fields(&self) -> &[TextField] {
        &self.text_fields
    }

    /// Append an action
    ///
    /// An alert holds at most one cancel action; further ones are dropped.
    pub fn add_action(&mut self, action: AlertAction) -> Option<usize> {
        if action.style == AlertActionStyle::Cancel
            && self.actions.iter().any(|a| a.style == AlertActionStyle::Cancel)
        {
            tracing::warn!(
                target: "setkit::setter",
                widget = "AlertController",
                title = action.title.as_deref().unwrap_or_default(),
                "alert already has a cancel action"
            );
            return None;
        }
        self.actions.push(action);
        Some(self.actions.len() - 1)
    }

    /// Add a text field, configuring it before it is stored
    ///
    /// `configure` always runs once. Only alerts keep the field; on an
    /// action sheet the configured field is dropped and `false` returned.
    pub fn add_text_field_with<F>(&mut self, configure: F) -> bool
    where
        F: FnOnce(Setter<'_, TextField>),
    {
        let mut field = TextField::default();
        configure(field.set());
        if self.preferred_style != AlertControllerStyle::Alert {
            tracing::warn!(
                target: "setkit::setter",
                widget = "AlertController",
                "text fields can only be added to alerts"
            );
            return false;
        }
        self.text_fields.push(field);
        true
    }

    /// Tap the action at `index` and dismiss
    pub fn tap(&self, index: usize) -> bool {
        self.actions.get(index).is_some_and(AlertAction::perform)
    }
}

pub trait AlertControllerSetterExt: Sized {
    fn action(self, action: AlertAction) -> Self;

    fn actions(self, actions: Vec<AlertAction>) -> Self;

    /// Highlight an action, adding it first when no action with the same
    /// title is present
    fn preferred_action(self, action: AlertAction) -> Self;

    fn add_text_field(self) -> Self;

    /// Add a text field configured inline
    ///
    /// The callback runs once for every style; action sheets then discard
    /// the field.
    fn add_text_field_with<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TextField>);
}

impl<'a, B> AlertControllerSetterExt for Setter<'a, B>
where
    B: AsMut<AlertController> + ?Sized,
{
    fn action(mut self, action: AlertAction) -> Self {
        target_mut::<AlertController, _>(&mut self).add_action(action);
        self
    }

    fn actions(mut self, actions: Vec<AlertAction>) -> Self {
        let alert = target_mut::<AlertController, _>(&mut self);
        for action in actions {
            alert.add_action(action);
        }
        self
    }

    fn preferred_action(mut self, action: AlertAction) -> Self {
        let alert = target_mut::<AlertController, _>(&mut self);
        let index = match alert.actions.iter().position(|a| a.title == action.title) {
            Some(index) => Some(index),
            None => alert.add_action(action),
        };
        if index.is_some() {
            alert.preferred_action = index;
        }
        self
    }

    fn add_text_field(self) -> Self {
        self.add_text_field_with(|_| {})
    }

    fn add_text_field_with<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TextField>),
    {
        target_mut::<AlertController, _>(&mut self).add_text_field_with(configure);
        self
    }
}
