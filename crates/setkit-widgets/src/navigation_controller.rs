//! Stack-based container controller

use crate::navigation_bar::NavigationBar;
use crate::navigation_item::NavigationItem;
use crate::toolbar::Toolbar;
use crate::view_controller::{Controller, ViewController};
use crate::widget::target_mut;
use setkit_core::setter::{Settable, Setter};
use setkit_macros::Setters;

#[derive(Debug, Clone, Setters)]
pub struct NavigationController {
    #[set(parent)]
    pub view_controller: ViewController,
    #[set(skip)]
    navigation_bar_hidden: bool,
    #[set(skip)]
    toolbar_hidden: bool,
    pub hides_bars_on_tap: bool,
    pub hides_bars_on_swipe: bool,
    pub hides_bars_when_vertically_compact: bool,
    pub hides_bars_when_keyboard_appears: bool,
    #[set(skip)]
    navigation_bar: NavigationBar,
    #[set(skip)]
    toolbar: Toolbar,
    #[set(skip)]
    view_controllers: Vec<Box<dyn Controller>>,
}

impl Default for NavigationController {
    fn default() -> Self {
        let mut toolbar = Toolbar::default();
        toolbar.view.hidden = true;
        Self {
            view_controller: ViewController::default(),
            navigation_bar_hidden: false,
            toolbar_hidden: true,
            hides_bars_on_tap: false,
            hides_bars_on_swipe: false,
            hides_bars_when_vertically_compact: false,
            hides_bars_when_keyboard_appears: false,
            navigation_bar: NavigationBar::default(),
            toolbar,
            view_controllers: Vec::new(),
        }
    }
}

impl NavigationController {
    pub fn with_root(root: impl Controller) -> Self {
        let mut navigation = Self::default();
        navigation.push_view_controller(Box::new(root));
        navigation
    }

    pub fn navigation_bar(&self) -> &NavigationBar {
        &self.navigation_bar
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn is_navigation_bar_hidden(&self) -> bool {
        self.navigation_bar_hidden
    }

    pub fn is_toolbar_hidden(&self) -> bool {
        self.toolbar_hidden
    }

    /// Controllers on the stack, root first
    pub fn view_controllers(&self) -> &[Box<dyn Controller>] {
        &self.view_controllers
    }

    pub fn top_view_controller(&self) -> Option<&(dyn Controller + 'static)> {
        self.view_controllers.last().map(|c| &**c)
    }

    pub fn push_view_controller(&mut self, controller: Box<dyn Controller>) {
        self.view_controllers.push(controller);
        self.sync_bars();
    }

    /// Pop the top controller; the root stays
    pub fn pop_view_controller(&mut self) -> Option<Box<dyn Controller>> {
        if self.view_controllers.len() <= 1 {
            return None;
        }
        let popped = self.view_controllers.pop();
        self.sync_bars();
        popped
    }

    fn set_view_controllers(&mut self, controllers: Vec<Box<dyn Controller>>) {
        self.view_controllers = controllers;
        self.sync_bars();
    }

    /// Mirror the stack's navigation items and the top toolbar items
    fn sync_bars(&mut self) {
        let items: Vec<NavigationItem> = self
            .view_controllers
            .iter()
            .map(|c| {
                let controller = c.view_controller();
                let mut item = controller.navigation_item().clone();
                if item.title.is_none() {
                    item.title = controller.display_title().map(str::to_owned);
                }
                item
            })
            .collect();
        self.navigation_bar.set_items(items);
        self.toolbar.items = self
            .view_controllers
            .last()
            .map(|c| c.view_controller().toolbar_items().to_vec())
            .unwrap_or_default();
    }
}

pub trait NavigationControllerSetterExt: Sized {
    fn navigation_bar_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, NavigationBar>);

    fn toolbar_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, Toolbar>);

    /// Replace the whole stack
    fn view_controllers(self, controllers: Vec<Box<dyn Controller>>) -> Self;

    fn view_controllers_animated(self, controllers: Vec<Box<dyn Controller>>, animated: bool)
        -> Self;

    fn navigation_bar_hidden(self, hidden: bool) -> Self;

    fn navigation_bar_hidden_animated(self, hidden: bool, animated: bool) -> Self;

    fn toolbar_hidden(self, hidden: bool) -> Self;

    fn toolbar_hidden_animated(self, hidden: bool, animated: bool) -> Self;
}

impl<'a, B> NavigationControllerSetterExt for Setter<'a, B>
where
    B: AsMut<NavigationController> + ?Sized,
{
    fn navigation_bar_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, NavigationBar>),
    {
        configure(target_mut::<NavigationController, _>(&mut self).navigation_bar.set());
        self
    }

    fn toolbar_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, Toolbar>),
    {
        configure(target_mut::<NavigationController, _>(&mut self).toolbar.set());
        self
    }

    fn view_controllers(mut self, controllers: Vec<Box<dyn Controller>>) -> Self {
        target_mut::<NavigationController, _>(&mut self).set_view_controllers(controllers);
        self
    }

    fn view_controllers_animated(
        self,
        controllers: Vec<Box<dyn Controller>>,
        animated: bool,
    ) -> Self {
        tracing::trace!(
            target: "setkit::setter",
            widget = "NavigationController",
            count = controllers.len(),
            animated
        );
        self.view_controllers(controllers)
    }

    fn navigation_bar_hidden(mut self, hidden: bool) -> Self {
        let navigation = target_mut::<NavigationController, _>(&mut self);
        navigation.navigation_bar_hidden = hidden;
        navigation.navigation_bar.view.hidden = hidden;
        self
    }

    fn navigation_bar_hidden_animated(self, hidden: bool, animated: bool) -> Self {
        tracing::trace!(target: "setkit::setter", widget = "NavigationController", hidden, animated);
        self.navigation_bar_hidden(hidden)
    }

    fn toolbar_hidden(mut self, hidden: bool) -> Self {
        let navigation = target_mut::<NavigationController, _>(&mut self);
        navigation.toolbar_hidden = hidden;
        navigation.toolbar.view.hidden = hidden;
        self
    }

    fn toolbar_hidden_animated(self, hidden: bool, animated: bool) -> Self {
        tracing::trace!(target: "setkit::setter", widget = "NavigationController", hidden, animated);
        self.toolbar_hidden(hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar_item::BarButtonItem;
    use crate::navigation_bar::NavigationBarSetters;
    use crate::navigation_item::NavigationItemSetters;
    use crate::view_controller::{ViewControllerSetterExt, ViewControllerSetters};

    fn screen(title: &str) -> Box<dyn Controller> {
        let mut controller = ViewController::default();
        controller
            .set()
            .navigation_item_properties(|item| {
                item.title(title);
            })
            .toolbar_items(vec![BarButtonItem::new(format!("{title} action"))], false);
        Box::new(controller)
    }

    #[test]
    fn test_stack_mirrors_navigation_items() {
        let mut navigation = NavigationController::default();
        navigation
            .set()
            .view_controllers_animated(vec![screen("Inbox"), screen("Message")], true)
            .title("Mail");

        assert_eq!(navigation.view_controllers().len(), 2);
        assert_eq!(navigation.navigation_bar().items().len(), 2);
        assert_eq!(
            navigation.navigation_bar().top_item().and_then(|i| i.title.as_deref()),
            Some("Message")
        );
        assert_eq!(
            navigation.toolbar().items.first().and_then(|i| i.title.as_deref()),
            Some("Message action")
        );
        assert_eq!(navigation.view_controller.title.as_deref(), Some("Mail"));

        assert!(navigation.pop_view_controller().is_some());
        assert!(navigation.pop_view_controller().is_none());
        assert_eq!(navigation.navigation_bar().items().len(), 1);
    }

    #[test]
    fn test_bar_visibility_and_nested_bars() {
        let mut navigation = NavigationController::with_root(ViewController::new("Root"));
        assert!(navigation.is_toolbar_hidden());

        navigation
            .set()
            .navigation_bar_hidden_animated(true, true)
            .toolbar_hidden_animated(false, false)
            .hides_bars_on_swipe(true)
            .navigation_bar_properties(|bar| {
                bar.prefers_large_titles(true);
            });

        assert!(navigation.is_navigation_bar_hidden());
        assert!(navigation.navigation_bar().view.hidden);
        assert!(!navigation.is_toolbar_hidden());
        assert!(navigation.hides_bars_on_swipe);
        assert!(navigation.navigation_bar().prefers_large_titles);
        assert!(navigation
            .top_view_controller()
            .is_some_and(|c| c.is::<ViewController>()));
    }

    #[test]
    fn test_untitled_items_take_the_controller_title() {
        let mut navigation = NavigationController::with_root(ViewController::new("Inbox"));
        navigation.push_view_controller(screen("Draft"));

        let bar = navigation.navigation_bar();
        assert_eq!(bar.back_item().and_then(|i| i.title.as_deref()), Some("Inbox"));
        assert_eq!(bar.top_item().and_then(|i| i.title.as_deref()), Some("Draft"));
        assert!(navigation
            .top_view_controller()
            .is_some_and(|c| c.view_controller().title.is_none()));
    }
}
