//! Search field with optional cancel button and scope bar

use crate::bar_item::BarStyle;
use crate::search_text_field::SearchTextField;
use crate::text_field::{AutocapitalizationType, AutocorrectionType, KeyboardType, ReturnKeyType};
use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::{Settable, Setter};
use setkit_core::types::{Color, Image};
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBarStyle {
    #[default]
    Default,
    Prominent,
    Minimal,
}

/// A search bar
///
/// The query text and placeholder live in the embedded
/// [`SearchTextField`]; the bar's `text` and `placeholder` setters write
/// through to it.
#[derive(Debug, Clone, Setters)]
pub struct SearchBar {
    #[set(parent)]
    pub view: View,
    #[set(into, strip_option)]
    pub prompt: Option<String>,
    pub search_bar_style: SearchBarStyle,
    pub bar_style: BarStyle,
    #[set(strip_option)]
    pub bar_tint_color: Option<Color>,
    pub translucent: bool,
    #[set(strip_option)]
    pub background_image: Option<Image>,
    pub shows_bookmark_button: bool,
    pub shows_search_results_button: bool,
    pub scope_button_titles: Vec<String>,
    pub selected_scope_button_index: usize,
    pub keyboard_type: KeyboardType,
    pub return_key_type: ReturnKeyType,
    pub autocapitalization_type: AutocapitalizationType,
    pub autocorrection_type: AutocorrectionType,
    #[set(skip)]
    shows_cancel_button: bool,
    #[set(skip)]
    shows_scope_bar: bool,
    #[set(skip)]
    search_text_field: SearchTextField,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            view: View::default(),
            prompt: None,
            search_bar_style: SearchBarStyle::Default,
            bar_style: BarStyle::Default,
            bar_tint_color: None,
            translucent: true,
            background_image: None,
            shows_bookmark_button: false,
            shows_search_results_button: false,
            scope_button_titles: Vec::new(),
            selected_scope_button_index: 0,
            keyboard_type: KeyboardType::default(),
            return_key_type: ReturnKeyType::Search,
            autocapitalization_type: AutocapitalizationType::default(),
            autocorrection_type: AutocorrectionType::default(),
            shows_cancel_button: false,
            shows_scope_bar: false,
            search_text_field: SearchTextField::default(),
        }
    }
}

impl SearchBar {
    pub fn text(&self) -> &str {
        self.search_text_field.text_field.text()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.search_text_field.text_field.placeholder.as_deref()
    }

    pub fn search_text_field(&self) -> &SearchTextField {
        &self.search_text_field
    }

    pub fn search_text_field_mut(&mut self) -> &mut SearchTextField {
        &mut self.search_text_field
    }

    pub fn shows_cancel_button(&self) -> bool {
        self.shows_cancel_button
    }

    pub fn shows_scope_bar(&self) -> bool {
        self.shows_scope_bar
    }

    /// Title of the selected scope button, if the scope bar has one
    pub fn selected_scope_title(&self) -> Option<&str> {
        self.scope_button_titles
            .get(self.selected_scope_button_index)
            .map(String::as_str)
    }
}

pub trait SearchBarSetterExt: Sized {
    fn text(self, text: impl Into<String>) -> Self;

    fn placeholder(self, placeholder: impl Into<String>) -> Self;

    /// Configure the embedded search field inline
    fn search_text_field_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, SearchTextField>);

    fn shows_cancel_button(self, shows: bool) -> Self;

    fn shows_cancel_button_animated(self, shows: bool, animated: bool) -> Self;

    fn shows_scope_bar(self, shows: bool) -> Self;

    fn shows_scope_bar_animated(self, shows: bool, animated: bool) -> Self;
}

impl<'a, B> SearchBarSetterExt for Setter<'a, B>
where
    B: AsMut<SearchBar> + ?Sized,
{
    fn text(mut self, text: impl Into<String>) -> Self {
        target_mut::<SearchBar, _>(&mut self).search_text_field.text_field.text = Some(text.into());
        self
    }

    fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        target_mut::<SearchBar, _>(&mut self)
            .search_text_field
            .text_field
            .placeholder = Some(placeholder.into());
        self
    }

    fn search_text_field_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, SearchTextField>),
    {
        configure(target_mut::<SearchBar, _>(&mut self).search_text_field.set());
        self
    }

    fn shows_cancel_button(mut self, shows: bool) -> Self {
        target_mut::<SearchBar, _>(&mut self).shows_cancel_button = shows;
        self
    }

    fn shows_cancel_button_animated(self, shows: bool, animated: bool) -> Self {
        tracing::trace!(target: "setkit::setter", widget = "SearchBar", shows, animated);
        self.shows_cancel_button(shows)
    }

    fn shows_scope_bar(mut self, shows: bool) -> Self {
        target_mut::<SearchBar, _>(&mut self).shows_scope_bar = shows;
        self
    }

    fn shows_scope_bar_animated(self, shows: bool, animated: bool) -> Self {
        tracing::trace!(target: "setkit::setter", widget = "SearchBar", shows, animated);
        self.shows_scope_bar(shows)
    }
}
