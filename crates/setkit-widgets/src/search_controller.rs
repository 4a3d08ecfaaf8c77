//! Controller presenting a search bar and its results

use crate::search_bar::SearchBar;
use crate::view_controller::{Controller, ViewController};
use crate::widget::target_mut;
use setkit_core::setter::{Settable, Setter};
use setkit_macros::Setters;

#[derive(Debug, Clone, Setters)]
pub struct SearchController {
    #[set(parent)]
    pub view_controller: ViewController,
    pub obscures_background_during_presentation: bool,
    pub hides_navigation_bar_during_presentation: bool,
    pub automatically_shows_cancel_button: bool,
    pub automatically_shows_scope_bar: bool,
    pub automatically_shows_search_results_controller: bool,
    pub shows_search_results_controller: bool,
    pub active: bool,
    #[set(skip)]
    search_bar: SearchBar,
    #[set(skip)]
    search_results_controller: Option<Box<dyn Controller>>,
}

impl Default for SearchController {
    fn default() -> Self {
        Self {
            view_controller: ViewController::default(),
            obscures_background_during_presentation: true,
            hides_navigation_bar_during_presentation: true,
            automatically_shows_cancel_button: true,
            automatically_shows_scope_bar: true,
            automatically_shows_search_results_controller: true,
            shows_search_results_controller: false,
            active: false,
            search_bar: SearchBar::default(),
            search_results_controller: None,
        }
    }
}

impl SearchController {
    pub fn with_results(results: impl Controller) -> Self {
        Self {
            search_results_controller: Some(Box::new(results)),
            ..Self::default()
        }
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    pub fn search_results_controller(&self) -> Option<&(dyn Controller + 'static)> {
        self.search_results_controller.as_deref()
    }

    /// Whether the results controller is on screen right now
    ///
    /// Shown automatically once the query is non-empty, or explicitly
    /// through `shows_search_results_controller`.
    pub fn is_showing_results(&self) -> bool {
        if self.search_results_controller.is_none() || !self.active {
            return false;
        }
        self.shows_search_results_controller
            || (self.automatically_shows_search_results_controller
                && !self.search_bar.text().is_empty())
    }
}

pub trait SearchControllerSetterExt: Sized {
    /// Configure the search bar inline
    fn search_bar_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, SearchBar>);
}

impl<'a, B> SearchControllerSetterExt for Setter<'a, B>
where
    B: AsMut<SearchController> + ?Sized,
{
    fn search_bar_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, SearchBar>),
    {
        configure(target_mut::<SearchController, _>(&mut self).search_bar.set());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_bar::{SearchBarSetterExt, SearchBarSetters};

    #[test]
    fn test_search_bar_properties() {
        let mut search = SearchController::default();
        search
            .set()
            .obscures_background_during_presentation(false)
            .search_bar_properties(|bar| {
                bar.placeholder("Search messages").scope_button_titles(vec!["All".into()]);
            });

        assert!(!search.obscures_background_during_presentation);
        assert_eq!(search.search_bar().placeholder(), Some("Search messages"));
        assert_eq!(search.search_bar().scope_button_titles.len(), 1);
    }

    #[test]
    fn test_results_follow_query() {
        let mut search = SearchController::with_results(ViewController::new("Results"));
        search.set().active(true);
        assert!(!search.is_showing_results());

        search.set().search_bar_properties(|bar| {
            bar.text("rust");
        });
        assert!(search.is_showing_results());

        search.set().active(false);
        assert!(!search.is_showing_results());
    }
}
