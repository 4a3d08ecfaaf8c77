//! Single-line text input
//!
//! Also home to the keyboard and text-input traits shared with
//! [`TextView`](crate::text_view::TextView) and
//! [`SearchBar`](crate::search_bar::SearchBar).

use crate::control::{Control, ControlEvents};
use crate::view::View;
use crate::widget::{target_mut, Widget};
use setkit_core::setter::{Settable, Setter};
use setkit_core::types::{Color, Font, Image, TextAlignment};
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    #[default]
    Default,
    AsciiCapable,
    NumbersAndPunctuation,
    Url,
    NumberPad,
    PhonePad,
    EmailAddress,
    DecimalPad,
    WebSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnKeyType {
    #[default]
    Default,
    Go,
    Next,
    Search,
    Send,
    Done,
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutocapitalizationType {
    None,
    Words,
    #[default]
    Sentences,
    AllCharacters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutocorrectionType {
    #[default]
    Default,
    No,
    Yes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Line,
    Bezel,
    RoundedRect,
}

/// When an overlay view or the clear button is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Never,
    WhileEditing,
    UnlessEditing,
    Always,
}

#[derive(Debug, Clone, Setters)]
pub struct TextField {
    #[set(parent, ancestors(View))]
    pub control: Control,
    #[set(into, strip_option)]
    pub text: Option<String>,
    #[set(into, strip_option)]
    pub placeholder: Option<String>,
    #[set(strip_option)]
    pub font: Option<Font>,
    #[set(strip_option)]
    pub text_color: Option<Color>,
    pub text_alignment: TextAlignment,
    pub border_style: BorderStyle,
    #[set(strip_option)]
    pub background: Option<Image>,
    #[set(strip_option)]
    pub disabled_background: Option<Image>,
    pub keyboard_type: KeyboardType,
    pub return_key_type: ReturnKeyType,
    pub autocapitalization_type: AutocapitalizationType,
    pub autocorrection_type: AutocorrectionType,
    pub enables_return_key_automatically: bool,
    pub secure_text_entry: bool,
    pub clear_button_mode: ViewMode,
    pub clears_on_begin_editing: bool,
    pub adjusts_font_size_to_fit_width: bool,
    /// Smallest size the font shrinks to when fitting the width
    pub minimum_font_size: f32,
    pub left_view_mode: ViewMode,
    pub right_view_mode: ViewMode,
    #[set(skip)]
    left_view: Option<Box<dyn Widget>>,
    #[set(skip)]
    right_view: Option<Box<dyn Widget>>,
    #[set(skip)]
    first_responder: bool,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            control: Control::default(),
            text: None,
            placeholder: None,
            font: None,
            text_color: None,
            text_alignment: TextAlignment::default(),
            border_style: BorderStyle::default(),
            background: None,
            disabled_background: None,
            keyboard_type: KeyboardType::default(),
            return_key_type: ReturnKeyType::default(),
            autocapitalization_type: AutocapitalizationType::default(),
            autocorrection_type: AutocorrectionType::default(),
            enables_return_key_automatically: false,
            secure_text_entry: false,
            clear_button_mode: ViewMode::Never,
            clears_on_begin_editing: false,
            adjusts_font_size_to_fit_width: false,
            minimum_font_size: 0.0,
            left_view_mode: ViewMode::Never,
            right_view_mode: ViewMode::Never,
            left_view: None,
            right_view: None,
            first_responder: false,
        }
    }
}

impl TextField {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn left_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.left_view.as_deref()
    }

    pub fn right_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.right_view.as_deref()
    }

    /// Left overlay view, creating an empty one when missing
    pub fn left_view_or_insert(&mut self) -> &mut (dyn Widget + 'static) {
        overlay_or_insert(&mut self.left_view, "left_view")
    }

    /// Right overlay view, creating an empty one when missing
    pub fn right_view_or_insert(&mut self) -> &mut (dyn Widget + 'static) {
        overlay_or_insert(&mut self.right_view, "right_view")
    }

    pub fn is_first_responder(&self) -> bool {
        self.first_responder
    }

    /// Start editing
    ///
    /// Fails for disabled fields. Clears the text first when
    /// `clears_on_begin_editing` is set.
    pub fn become_first_responder(&mut self) -> bool {
        if !self.control.enabled {
            return false;
        }
        if !self.first_responder {
            self.first_responder = true;
            if self.clears_on_begin_editing {
                self.text = None;
            }
            self.control.send_actions(ControlEvents::EDITING_DID_BEGIN);
        }
        true
    }

    pub fn resign_first_responder(&mut self) -> bool {
        if self.first_responder {
            self.first_responder = false;
            self.control.send_actions(ControlEvents::EDITING_DID_END);
        }
        true
    }

    /// Append typed text, notifying editing-changed targets
    pub fn insert_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
        self.control.send_actions(ControlEvents::EDITING_CHANGED);
    }
}

fn overlay_or_insert<'a>(
    slot: &'a mut Option<Box<dyn Widget>>,
    part: &'static str,
) -> &'a mut (dyn Widget + 'static) {
    if slot.is_none() {
        tracing::debug!(
            target: "setkit::setter",
            widget = "TextField",
            part,
            "creating missing sub-component"
        );
    }
    &mut **slot.get_or_insert_with(|| Box::new(View::default()) as Box<dyn Widget>)
}

/// Overlay-view and responder setters for text fields
pub trait TextFieldSetterExt: Sized {
    fn left_view(self, view: impl Widget) -> Self;

    fn right_view(self, view: impl Widget) -> Self;

    /// Configure the left overlay view inline
    ///
    /// An empty view is installed first when the field has none, so the
    /// configuration always lands on a view.
    fn left_view_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, dyn Widget>);

    /// Configure the right overlay view inline
    ///
    /// Installs an empty view first when the field has none.
    fn right_view_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, dyn Widget>);

    /// Become or resign first responder
    fn first_responder(self, first_responder: bool) -> Self;
}

impl<'a, B> TextFieldSetterExt for Setter<'a, B>
where
    B: AsMut<TextField> + ?Sized,
{
    fn left_view(mut self, view: impl Widget) -> Self {
        target_mut::<TextField, _>(&mut self).left_view = Some(Box::new(view));
        self
    }

    fn right_view(mut self, view: impl Widget) -> Self {
        target_mut::<TextField, _>(&mut self).right_view = Some(Box::new(view));
        self
    }

    fn left_view_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, dyn Widget>),
    {
        configure(target_mut::<TextField, _>(&mut self).left_view_or_insert().set());
        self
    }

    fn right_view_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, dyn Widget>),
    {
        configure(target_mut::<TextField, _>(&mut self).right_view_or_insert().set());
        self
    }

    fn first_responder(mut self, first_responder: bool) -> Self {
        let field = target_mut::<TextField, _>(&mut self);
        if first_responder {
            field.become_first_responder();
        } else {
            field.resign_first_responder();
        }
        self
    }
}
