//! Button widget
//!
//! Titles, title colors and images are stored per [`ControlState`]. The title
//! label and image view are created by the first title or image assignment,
//! mirroring how a toolkit button builds its subviews on demand.
//!
//! The subviews show the content for the state current at the last per-state
//! assignment. Changing `enabled`, `selected` or `highlighted` afterwards
//! leaves them as they were until [`Button::refresh_for_state`] runs.

use crate::control::{Control, ControlState};
use crate::image_view::ImageView;
use crate::label::{Label, LabelSetterExt, LabelSetters};
use crate::menu::Menu;
use crate::view::{ContentMode, View, ViewSetters};
use crate::widget::target_mut;
use setkit_core::setter::{Settable, Setter};
use setkit_core::types::{Color, Font, Image};
use setkit_macros::Setters;
use std::collections::HashMap;

/// Semantic role of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonRole {
    #[default]
    Normal,
    Primary,
    Cancel,
    Destructive,
}

#[derive(Debug, Clone, Default, Setters)]
pub struct Button {
    #[set(parent, ancestors(View))]
    pub control: Control,
    pub role: ButtonRole,
    #[set(strip_option, feature = "menus")]
    pub menu: Option<Menu>,
    #[set(skip)]
    titles: HashMap<ControlState, String>,
    #[set(skip)]
    title_colors: HashMap<ControlState, Color>,
    #[set(skip)]
    images: HashMap<ControlState, Image>,
    #[set(skip)]
    background_images: HashMap<ControlState, Image>,
    #[set(skip)]
    title_label: Option<Label>,
    #[set(skip)]
    image_view: Option<ImageView>,
}

impl Button {
    pub fn new(title: impl Into<String>) -> Self {
        let mut button = Self::default();
        button.set_title(title, ControlState::Normal);
        button
    }

    /// Title for `state`, falling back to the normal-state title
    pub fn title_for(&self, state: ControlState) -> Option<&str> {
        per_state(&self.titles, state).map(String::as_str)
    }

    /// Title for the control's current state
    pub fn current_title(&self) -> Option<&str> {
        self.title_for(self.control.state())
    }

    pub fn title_color_for(&self, state: ControlState) -> Option<Color> {
        per_state(&self.title_colors, state).copied()
    }

    pub fn image_for(&self, state: ControlState) -> Option<&Image> {
        per_state(&self.images, state)
    }

    pub fn background_image_for(&self, state: ControlState) -> Option<&Image> {
        per_state(&self.background_images, state)
    }

    /// The title label, once a title has been set
    pub fn title_label(&self) -> Option<&Label> {
        self.title_label.as_ref()
    }

    /// The image view, once an image has been set
    pub fn image_view(&self) -> Option<&ImageView> {
        self.image_view.as_ref()
    }

    pub fn image_view_mut(&mut self) -> Option<&mut ImageView> {
        self.image_view.as_mut()
    }

    /// Store a title and show it when `state` is the current state
    ///
    /// Creates the title label if the button has none yet.
    pub fn set_title(&mut self, title: impl Into<String>, state: ControlState) {
        self.titles.insert(state, title.into());
        self.title_label.get_or_insert_with(Label::default);
        self.refresh_for_state();
    }

    /// Store a title color; applied to the title label whenever one exists
    pub fn set_title_color(&mut self, color: Color, state: ControlState) {
        self.title_colors.insert(state, color);
        self.refresh_for_state();
    }

    /// Store an image; creates the image view if the button has none yet
    pub fn set_image(&mut self, image: Image, state: ControlState) {
        self.images.insert(state, image);
        self.image_view.get_or_insert_with(ImageView::default);
        self.refresh_for_state();
    }

    /// Show the title, title color and image stored for the current state
    ///
    /// Subviews that do not exist yet are not created. A state with no
    /// stored title color keeps the label's own color.
    pub fn refresh_for_state(&mut self) {
        let state = self.control.state();
        let text = self.title_for(state).map(str::to_owned);
        let color = self.title_color_for(state);
        let image = self.image_for(state).cloned();
        if let Some(label) = self.title_label.as_mut() {
            label.text = text;
            if let Some(color) = color {
                label.text_color = color;
            }
        }
        if let Some(image_view) = self.image_view.as_mut() {
            image_view.image = image;
        }
    }

    pub fn set_background_image(&mut self, image: Image, state: ControlState) {
        self.background_images.insert(state, image);
    }

    /// The title label, creating it with an empty normal title when missing
    pub fn title_label_or_insert(&mut self) -> &mut Label {
        if self.title_label.is_none() {
            tracing::debug!(
                target: "setkit::setter",
                widget = "Button",
                part = "title_label",
                "creating missing sub-component"
            );
            self.set_title("", ControlState::Normal);
        }
        self.title_label.get_or_insert_with(Label::default)
    }
}

fn per_state<T>(values: &HashMap<ControlState, T>, state: ControlState) -> Option<&T> {
    values
        .get(&state)
        .or_else(|| values.get(&ControlState::Normal))
}

/// Per-state content and title-label setters for buttons
///
/// The label setters (`font`, `font_size`, `multiline`, `number_of_lines`
/// and `title_label_properties`) create the title label with an empty title
/// when it does not exist yet, so the configuration is never dropped.
pub trait ButtonSetterExt: Sized {
    /// Normal-state title
    fn title(self, title: impl Into<String>) -> Self;

    fn title_for(self, title: impl Into<String>, state: ControlState) -> Self;

    /// Normal-state title color
    fn title_color(self, color: Color) -> Self;

    fn title_color_for(self, color: Color, state: ControlState) -> Self;

    /// Normal-state image
    fn image(self, image: Image) -> Self;

    fn image_for(self, image: Image, state: ControlState) -> Self;

    /// Normal-state background image
    fn background_image(self, image: Image) -> Self;

    fn background_image_for(self, image: Image, state: ControlState) -> Self;

    fn font(self, font: Font) -> Self;

    fn font_size(self, size: f32) -> Self;

    fn multiline(self) -> Self;

    fn number_of_lines(self, lines: usize) -> Self;

    /// Configure the title label inline
    fn title_label_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, Label>);

    /// Content mode of the image view
    ///
    /// Does nothing while the button has no image; unlike the label
    /// setters this never creates the image view.
    fn image_content_mode(self, mode: ContentMode) -> Self;
}

impl<'a, B> ButtonSetterExt for Setter<'a, B>
where
    B: AsMut<Button> + ?Sized,
{
    fn title(self, title: impl Into<String>) -> Self {
        self.title_for(title, ControlState::Normal)
    }

    fn title_for(mut self, title: impl Into<String>, state: ControlState) -> Self {
        target_mut::<Button, _>(&mut self).set_title(title, state);
        self
    }

    fn title_color(self, color: Color) -> Self {
        self.title_color_for(color, ControlState::Normal)
    }

    fn title_color_for(mut self, color: Color, state: ControlState) -> Self {
        target_mut::<Button, _>(&mut self).set_title_color(color, state);
        self
    }

    fn image(self, image: Image) -> Self {
        self.image_for(image, ControlState::Normal)
    }

    fn image_for(mut self, image: Image, state: ControlState) -> Self {
        target_mut::<Button, _>(&mut self).set_image(image, state);
        self
    }

    fn background_image(self, image: Image) -> Self {
        self.background_image_for(image, ControlState::Normal)
    }

    fn background_image_for(mut self, image: Image, state: ControlState) -> Self {
        target_mut::<Button, _>(&mut self).set_background_image(image, state);
        self
    }

    fn font(self, font: Font) -> Self {
        self.title_label_properties(|label| {
            label.font(font);
        })
    }

    fn font_size(self, size: f32) -> Self {
        self.title_label_properties(|label| {
            label.font_size(size);
        })
    }

    fn multiline(self) -> Self {
        self.title_label_properties(|label| {
            label.multiline();
        })
    }

    fn number_of_lines(self, lines: usize) -> Self {
        self.title_label_properties(|label| {
            label.number_of_lines(lines);
        })
    }

    fn title_label_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, Label>),
    {
        configure(target_mut::<Button, _>(&mut self).title_label_or_insert().set());
        self
    }

    fn image_content_mode(mut self, mode: ContentMode) -> Self {
        match target_mut::<Button, _>(&mut self).image_view_mut() {
            Some(image_view) => {
                image_view.set().content_mode(mode);
            }
            None => {
                tracing::trace!(
                    target: "setkit::setter",
                    widget = "Button",
                    "no image view, content mode ignored"
                );
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlSetterExt, ControlSetters, ControlEvents};
    use crate::view::ViewSetterExt;
    use crate::widget::Action;
    use setkit_core::shape::ViewShape;
    use setkit_core::types::{FontWeight, Rect};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_creates_label() {
        let mut button = Button::default();
        assert!(button.title_label().is_none());

        button.set().title("Add");
        assert_eq!(button.title_label().and_then(|l| l.text.as_deref()), Some("Add"));
        assert_eq!(button.title_for(ControlState::Normal), Some("Add"));
    }

    #[test]
    fn test_per_state_titles_fall_back_to_normal() {
        let mut button = Button::new("Save");
        button.set().title_for("Saving", ControlState::Disabled);

        assert_eq!(button.title_for(ControlState::Highlighted), Some("Save"));
        assert_eq!(button.current_title(), Some("Save"));

        button.set().enabled(false).title_for("Saving", ControlState::Disabled);
        assert_eq!(button.current_title(), Some("Saving"));
        assert_eq!(button.title_label().and_then(|l| l.text.as_deref()), Some("Saving"));
    }

    #[test]
    fn test_font_repairs_missing_label() {
        let mut button = Button::default();
        button.set().font(Font::system(14.0, FontWeight::Medium));

        let label = button.title_label().map(|l| (l.text.clone(), l.font.clone()));
        assert_eq!(
            label,
            Some((Some(String::new()), Font::system(14.0, FontWeight::Medium)))
        );
    }

    #[test]
    fn test_label_setters_keep_existing_title() {
        let mut button = Button::new("Go");
        button.set().font_size(30.0).multiline();

        let label = button.title_label().map(|l| (l.text.as_deref(), l.font.size, l.number_of_lines));
        assert_eq!(label, Some((Some("Go"), 30.0, 0)));
    }

    #[test]
    fn test_number_of_lines_repairs_missing_label() {
        let mut button = Button::default();
        button.set().number_of_lines(3);
        assert_eq!(button.title_label().map(|l| l.number_of_lines), Some(3));
    }

    #[test]
    fn test_image_content_mode_without_image_is_noop() {
        let mut button = Button::default();
        button.set().image_content_mode(ContentMode::ScaleAspectFit);
        assert!(button.image_view().is_none());

        button
            .set()
            .image(Image::named("plus"))
            .image_content_mode(ContentMode::ScaleAspectFit);
        assert_eq!(
            button.image_view().map(|iv| iv.view.content_mode),
            Some(ContentMode::ScaleAspectFit)
        );
    }

    #[test]
    fn test_full_chain_reaches_every_family() {
        let mut button = Button::default();
        button.control.view.set_frame(Rect::new(0.0, 0.0, 120.0, 44.0));
        button
            .set()
            .title("Tap")
            .title_color(Color::WHITE)
            .background_color(Color::SYSTEM_BLUE)
            .corners(ViewShape::RoundedRect(12.0))
            .selected(true)
            .role(ButtonRole::Primary)
            .tap(Action::new(|| {}));

        assert_eq!(button.control.view.layer.corner_radius, 12.0);
        assert_eq!(button.control.view.background_color, Some(Color::SYSTEM_BLUE));
        assert_eq!(button.title_color_for(ControlState::Selected), Some(Color::WHITE));
        assert_eq!(button.role, ButtonRole::Primary);
        assert_eq!(button.control.send_actions(ControlEvents::TOUCH_UP_INSIDE), 1);
    }

    #[test]
    fn test_title_color_before_title() {
        let mut button = Button::default();
        button.set().title_color(Color::SYSTEM_RED).title("Tap");

        assert_eq!(button.title_label().map(|l| l.text_color), Some(Color::SYSTEM_RED));
    }

    #[test]
    fn test_state_change_shows_after_refresh() {
        let mut button = Button::new("Send");
        button
            .set()
            .title_for("Sending", ControlState::Disabled)
            .title_color_for(Color::SYSTEM_GRAY, ControlState::Disabled)
            .enabled(false);
        assert_eq!(button.title_label().and_then(|l| l.text.as_deref()), Some("Send"));

        button.refresh_for_state();
        let label = button.title_label().map(|l| (l.text.as_deref(), l.text_color));
        assert_eq!(label, Some((Some("Sending"), Color::SYSTEM_GRAY)));
    }
}

