//! Screen-level controllers
//!
//! A [`ViewController`] owns the root view of one screen together with the
//! navigation item, toolbar items and tab bar item that containers show for
//! it. Container controllers embed a `ViewController` the way widgets embed
//! a [`View`], so view-controller setters reach them through `AsMut`.
//!
//! The root view loads lazily: configuring it through
//! [`ViewControllerSetterExt::view_properties`] installs an empty [`View`]
//! first when none has been set.

use crate::bar_item::{BarButtonItem, TabBarItem};
use crate::navigation_item::NavigationItem;
use crate::view::View;
use crate::widget::{target_mut, Widget};
use bitflags::bitflags;
use setkit_core::setter::{Settable, Setter};
use setkit_core::types::{EdgeInsets, Size, UserInterfaceStyle};
use setkit_macros::Setters;
use std::any::Any;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPresentationStyle {
    #[default]
    Automatic,
    FullScreen,
    PageSheet,
    FormSheet,
    CurrentContext,
    OverFullScreen,
    OverCurrentContext,
    Popover,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalTransitionStyle {
    #[default]
    CoverVertical,
    FlipHorizontal,
    CrossDissolve,
    PartialCurl,
}

bitflags! {
    /// System appearance refreshes a controller has asked for
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PendingUpdates: u8 {
        const STATUS_BAR_APPEARANCE = 1 << 0;
        const HOME_INDICATOR_AUTO_HIDDEN = 1 << 1;
        const SCREEN_EDGES_DEFERRING_SYSTEM_GESTURES = 1 << 2;
        const SUPPORTED_INTERFACE_ORIENTATIONS = 1 << 3;
    }
}

#[derive(Debug, Clone, Default, Setters)]
pub struct ViewController {
    #[set(into, strip_option)]
    pub title: Option<String>,
    pub modal_presentation_style: ModalPresentationStyle,
    pub modal_transition_style: ModalTransitionStyle,
    pub additional_safe_area_insets: EdgeInsets,
    pub hides_bottom_bar_when_pushed: bool,
    pub defines_presentation_context: bool,
    pub preferred_content_size: Size,
    pub override_user_interface_style: UserInterfaceStyle,
    #[set(strip_option)]
    pub tab_bar_item: Option<TabBarItem>,
    #[set(skip)]
    view: Option<Box<dyn Widget>>,
    #[set(skip)]
    navigation_item: NavigationItem,
    #[set(skip)]
    toolbar_items: Vec<BarButtonItem>,
    #[set(skip)]
    editing: bool,
    #[set(skip)]
    pending_updates: PendingUpdates,
}

impl ViewController {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_view_loaded(&self) -> bool {
        self.view.is_some()
    }

    /// Root view, if loaded
    pub fn view(&self) -> Option<&(dyn Widget + 'static)> {
        self.view.as_deref()
    }

    /// Root view, loading an empty one when missing
    pub fn load_view_if_needed(&mut self) -> &mut (dyn Widget + 'static) {
        if self.view.is_none() {
            tracing::debug!(
                target: "setkit::setter",
                widget = "ViewController",
                part = "view",
                "creating missing sub-component"
            );
        }
        &mut **self
            .view
            .get_or_insert_with(|| Box::new(View::default()) as Box<dyn Widget>)
    }

    pub fn navigation_item(&self) -> &NavigationItem {
        &self.navigation_item
    }

    pub fn navigation_item_mut(&mut self) -> &mut NavigationItem {
        &mut self.navigation_item
    }

    pub fn toolbar_items(&self) -> &[BarButtonItem] {
        &self.toolbar_items
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn pending_updates(&self) -> PendingUpdates {
        self.pending_updates
    }

    /// Hand the requested refreshes to the presenter and clear them
    pub fn take_pending_updates(&mut self) -> PendingUpdates {
        std::mem::take(&mut self.pending_updates)
    }

    /// Title containers show for this screen: the navigation item's, then
    /// the controller's own
    pub fn display_title(&self) -> Option<&str> {
        self.navigation_item
            .title
            .as_deref()
            .or(self.title.as_deref())
    }
}

/// Base trait for every controller in a container's stack
///
/// Implemented for any clonable type that can be viewed as a
/// [`ViewController`].
pub trait Controller: Any + fmt::Debug + Send + Sync {
    fn view_controller(&self) -> &ViewController;

    fn view_controller_mut(&mut self) -> &mut ViewController;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn clone_box(&self) -> Box<dyn Controller>;
}

impl<T> Controller for T
where
    T: AsRef<ViewController> + AsMut<ViewController> + Clone + fmt::Debug + Send + Sync + 'static,
{
    fn view_controller(&self) -> &ViewController {
        AsRef::<ViewController>::as_ref(self)
    }

    fn view_controller_mut(&mut self) -> &mut ViewController {
        AsMut::<ViewController>::as_mut(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Controller> {
        Box::new(self.clone())
    }
}

impl dyn Controller {
    pub fn is<T: Controller>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Controller>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Controller>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl Clone for Box<dyn Controller> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl AsRef<ViewController> for dyn Controller {
    fn as_ref(&self) -> &ViewController {
        self.view_controller()
    }
}

impl AsMut<ViewController> for dyn Controller {
    fn as_mut(&mut self) -> &mut ViewController {
        self.view_controller_mut()
    }
}

impl Settable for dyn Controller {}

pub trait ViewControllerSetterExt: Sized {
    /// Replace the root view
    fn view(self, view: impl Widget) -> Self;

    /// Configure the root view inline, loading an empty one when missing
    fn view_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, dyn Widget>);

    fn navigation_item_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, NavigationItem>);

    /// Configure the tab bar item inline, creating one titled after the
    /// controller when missing
    fn tab_bar_item_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TabBarItem>);

    fn editing(self, editing: bool, animated: bool) -> Self;

    fn toolbar_items(self, items: Vec<BarButtonItem>, animated: bool) -> Self;

    fn needs_status_bar_appearance_update(self) -> Self;

    fn needs_update_of_home_indicator_auto_hidden(self) -> Self;

    fn needs_update_of_screen_edges_deferring_system_gestures(self) -> Self;

    fn needs_update_of_supported_interface_orientations(self) -> Self;
}

fn request<B>(setter: &mut Setter<'_, B>, update: PendingUpdates)
where
    B: AsMut<ViewController> + ?Sized,
{
    target_mut::<ViewController, _>(setter).pending_updates |= update;
    tracing::trace!(target: "setkit::setter", widget = "ViewController", ?update, "update requested");
}

impl<'a, B> ViewControllerSetterExt for Setter<'a, B>
where
    B: AsMut<ViewController> + ?Sized,
{
    fn view(mut self, view: impl Widget) -> Self {
        target_mut::<ViewController, _>(&mut self).view = Some(Box::new(view));
        self
    }

    fn view_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, dyn Widget>),
    {
        configure(target_mut::<ViewController, _>(&mut self).load_view_if_needed().set());
        self
    }

    fn navigation_item_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, NavigationItem>),
    {
        configure(target_mut::<ViewController, _>(&mut self).navigation_item.set());
        self
    }

    fn tab_bar_item_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TabBarItem>),
    {
        let controller = target_mut::<ViewController, _>(&mut self);
        if controller.tab_bar_item.is_none() {
            tracing::debug!(
                target: "setkit::setter",
                widget = "ViewController",
                part = "tab_bar_item",
                "creating missing sub-component"
            );
        }
        let title = controller.title.clone();
        let item = controller.tab_bar_item.get_or_insert_with(|| TabBarItem {
            title,
            ..TabBarItem::default()
        });
        configure(item.set());
        self
    }

    fn editing(mut self, editing: bool, animated: bool) -> Self {
        target_mut::<ViewController, _>(&mut self).editing = editing;
        tracing::trace!(target: "setkit::setter", widget = "ViewController", editing, animated);
        self
    }

    fn toolbar_items(mut self, items: Vec<BarButtonItem>, animated: bool) -> Self {
        tracing::trace!(
            target: "setkit::setter",
            widget = "ViewController",
            count = items.len(),
            animated
        );
        target_mut::<ViewController, _>(&mut self).toolbar_items = items;
        self
    }

    fn needs_status_bar_appearance_update(mut self) -> Self {
        request(&mut self, PendingUpdates::STATUS_BAR_APPEARANCE);
        self
    }

    fn needs_update_of_home_indicator_auto_hidden(mut self) -> Self {
        request(&mut self, PendingUpdates::HOME_INDICATOR_AUTO_HIDDEN);
        self
    }

    fn needs_update_of_screen_edges_deferring_system_gestures(mut self) -> Self {
        request(&mut self, PendingUpdates::SCREEN_EDGES_DEFERRING_SYSTEM_GESTURES);
        self
    }

    fn needs_update_of_supported_interface_orientations(mut self) -> Self {
        request(&mut self, PendingUpdates::SUPPORTED_INTERFACE_ORIENTATIONS);
        self
    }
}
