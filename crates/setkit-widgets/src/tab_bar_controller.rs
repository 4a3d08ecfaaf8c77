//! Tab-based container controller

use crate::tab_bar::TabBar;
use crate::view_controller::{Controller, ViewController};
use crate::widget::target_mut;
use setkit_core::setter::{Settable, Setter};
use setkit_macros::Setters;

#[derive(Debug, Clone, Default, Setters)]
pub struct TabBarController {
    #[set(parent)]
    pub view_controller: ViewController,
    #[set(skip)]
    selected_index: usize,
    #[set(skip)]
    tab_bar: TabBar,
    #[set(skip)]
    view_controllers: Vec<Box<dyn Controller>>,
    #[set(skip)]
    customizable_view_controllers: Vec<Box<dyn Controller>>,
}

impl TabBarController {
    pub fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    pub fn view_controllers(&self) -> &[Box<dyn Controller>] {
        &self.view_controllers
    }

    pub fn customizable_view_controllers(&self) -> &[Box<dyn Controller>] {
        &self.customizable_view_controllers
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_view_controller(&self) -> Option<&(dyn Controller + 'static)> {
        self.view_controllers.get(self.selected_index).map(|c| &**c)
    }

    /// Select a tab; out-of-range indexes are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.view_controllers.len() {
            tracing::debug!(
                target: "setkit::setter",
                widget = "TabBarController",
                index,
                tabs = self.view_controllers.len(),
                "ignoring out-of-range tab selection"
            );
            return false;
        }
        self.selected_index = index;
        self.tab_bar.selected_item = Some(index);
        true
    }

    fn set_view_controllers(&mut self, controllers: Vec<Box<dyn Controller>>) {
        self.tab_bar.items = controllers
            .iter()
            .map(|c| {
                let controller = c.view_controller();
                let mut item = controller.tab_bar_item.clone().unwrap_or_default();
                if item.title.is_none() {
                    item.title = controller.title.clone();
                }
                item
            })
            .collect();
        self.view_controllers = controllers;
        if self.selected_index >= self.view_controllers.len() {
            self.selected_index = 0;
        }
        self.tab_bar.selected_item =
            (!self.view_controllers.is_empty()).then_some(self.selected_index);
    }
}

pub trait TabBarControllerSetterExt: Sized {
    fn tab_bar_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TabBar>);

    /// Replace the tabs; the tab bar shows each controller's tab bar item
    fn view_controllers(self, controllers: Vec<Box<dyn Controller>>) -> Self;

    fn view_controllers_animated(self, controllers: Vec<Box<dyn Controller>>, animated: bool)
        -> Self;

    fn customizable_view_controllers(self, controllers: Vec<Box<dyn Controller>>) -> Self;

    fn selected_index(self, index: usize) -> Self;
}

impl<'a, B> TabBarControllerSetterExt for Setter<'a, B>
where
    B: AsMut<TabBarController> + ?Sized,
{
    fn tab_bar_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, TabBar>),
    {
        configure(target_mut::<TabBarController, _>(&mut self).tab_bar.set());
        self
    }

    fn view_controllers(mut self, controllers: Vec<Box<dyn Controller>>) -> Self {
        target_mut::<TabBarController, _>(&mut self).set_view_controllers(controllers);
        self
    }

    fn view_controllers_animated(
        self,
        controllers: Vec<Box<dyn Controller>>,
        animated: bool,
    ) -> Self {
        tracing::trace!(
            target: "setkit::setter",
            widget = "TabBarController",
            count = controllers.len(),
            animated
        );
        self.view_controllers(controllers)
    }

    fn customizable_view_controllers(mut self, controllers: Vec<Box<dyn Controller>>) -> Self {
        target_mut::<TabBarController, _>(&mut self).customizable_view_controllers = controllers;
        self
    }

    fn selected_index(mut self, index: usize) -> Self {
        target_mut::<TabBarController, _>(&mut self).select(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar_item::TabBarItemSetters;
    use crate::tab_bar::TabBarSetters;
    use crate::view_controller::ViewControllerSetterExt;
    use setkit_core::types::{Color, Image};

    fn tabs() -> Vec<Box<dyn Controller>> {
        let mut search = ViewController::new("Search");
        search.set().tab_bar_item_properties(|item| {
            item.image(Image::named("magnifyingglass"));
        });
        vec![
            Box::new(ViewController::new("Home")) as Box<dyn Controller>,
            Box::new(search),
        ]
    }

    #[test]
    fn test_tab_bar_mirrors_controllers() {
        let mut tabs_controller = TabBarController::default();
        tabs_controller
            .set()
            .view_controllers_animated(tabs(), false)
            .selected_index(1)
            .tab_bar_properties(|bar| {
                bar.bar_tint_color(Color::WHITE);
            });

        let titles: Vec<_> = tabs_controller
            .tab_bar()
            .items
            .iter()
            .map(|i| i.title.clone().unwrap_or_default())
            .collect();
        assert_eq!(titles, vec!["Home", "Search"]);
        assert!(tabs_controller.tab_bar().items[1].image.is_some());
        assert_eq!(tabs_controller.tab_bar().selected_item, Some(1));
        assert_eq!(tabs_controller.tab_bar().bar_tint_color, Some(Color::WHITE));
        assert_eq!(
            tabs_controller
                .selected_view_controller()
                .and_then(|c| c.view_controller().title.as_deref()),
            Some("Search")
        );
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut tabs_controller = TabBarController::default();
        tabs_controller.set().view_controllers(tabs()).selected_index(7);
        assert_eq!(tabs_controller.selected_index(), 0);

        tabs_controller.set().customizable_view_controllers(tabs());
        assert_eq!(tabs_controller.customizable_view_controllers().len(), 2);
    }

    #[test]
    fn test_untitled_tab_item_takes_the_controller_title() {
        let mut settings = ViewController::new("Settings");
        settings.tab_bar_item = Some(crate::bar_item::TabBarItem {
            image: Some(Image::named("gear")),
            ..Default::default()
        });

        let mut tabs_controller = TabBarController::default();
        tabs_controller.set().view_controllers(vec![Box::new(settings) as Box<dyn Controller>]);

        let item = &tabs_controller.tab_bar().items[0];
        assert_eq!(item.title.as_deref(), Some("Settings"));
        assert!(item.image.is_some());
    }
}
