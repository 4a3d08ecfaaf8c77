//! Multi-line scrollable text

use crate::scroll_view::ScrollView;
use crate::text_field::{AutocapitalizationType, AutocorrectionType, KeyboardType, ReturnKeyType};
use crate::view::View;
use crate::widget::target_mut;
use bitflags::bitflags;
use setkit_core::setter::Setter;
use setkit_core::types::{Color, EdgeInsets, Font, TextAlignment};
use setkit_macros::Setters;
use std::ops::Range;

bitflags! {
    /// Content kinds turned into interactive links
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DataDetectorTypes: u32 {
        const PHONE_NUMBER = 1 << 0;
        const LINK = 1 << 1;
        const ADDRESS = 1 << 2;
        const CALENDAR_EVENT = 1 << 3;
        const SHIPMENT_TRACKING_NUMBER = 1 << 4;
        const FLIGHT_NUMBER = 1 << 5;
        const LOOKUP_SUGGESTION = 1 << 6;
    }
}

#[derive(Debug, Clone, Setters)]
pub struct TextView {
    #[set(parent, ancestors(View))]
    pub scroll_view: ScrollView,
    #[set(into, strip_option)]
    pub text: Option<String>,
    #[set(strip_option)]
    pub font: Option<Font>,
    #[set(strip_option)]
    pub text_color: Option<Color>,
    pub text_alignment: TextAlignment,
    pub editable: bool,
    pub selectable: bool,
    pub text_container_inset: EdgeInsets,
    pub data_detector_types: DataDetectorTypes,
    pub keyboard_type: KeyboardType,
    pub return_key_type: ReturnKeyType,
    pub autocapitalization_type: AutocapitalizationType,
    pub autocorrection_type: AutocorrectionType,
    pub secure_text_entry: bool,
    #[set(skip)]
    selected_range: Range<usize>,
    #[set(skip)]
    first_responder: bool,
}

impl Default for TextView {
    fn default() -> Self {
        Self {
            scroll_view: ScrollView::default(),
            text: None,
            font: None,
            text_color: None,
            text_alignment: TextAlignment::default(),
            editable: true,
            selectable: true,
            text_container_inset: EdgeInsets::symmetric(8.0, 0.0),
            data_detector_types: DataDetectorTypes::empty(),
            keyboard_type: KeyboardType::default(),
            return_key_type: ReturnKeyType::default(),
            autocapitalization_type: AutocapitalizationType::default(),
            autocorrection_type: AutocorrectionType::default(),
            secure_text_entry: false,
            selected_range: 0..0,
            first_responder: false,
        }
    }
}

impl TextView {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Selection in characters
    pub fn selected_range(&self) -> Range<usize> {
        self.selected_range.clone()
    }

    /// Select a character range, pinned to the current text
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.text().chars().count();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.selected_range = start..end;
    }

    pub fn is_first_responder(&self) -> bool {
        self.first_responder
    }

    /// Start editing; non-editable, non-selectable text views refuse
    pub fn become_first_responder(&mut self) -> bool {
        if !self.editable && !self.selectable {
            return false;
        }
        self.first_responder = true;
        true
    }

    pub fn resign_first_responder(&mut self) -> bool {
        self.first_responder = false;
        true
    }
}

pub trait TextViewSetterExt: Sized {
    /// Become or resign first responder
    fn first_responder(self, first_responder: bool) -> Self;

    /// Select a character range; out-of-range bounds are pinned to the text
    fn selected_range(self, range: Range<usize>) -> Self;
}

impl<'a, B> TextViewSetterExt for Setter<'a, B>
where
    B: AsMut<TextView> + ?Sized,
{
    fn first_responder(mut self, first_responder: bool) -> Self {
        let text_view = target_mut::<TextView, _>(&mut self);
        if first_responder {
            text_view.become_first_responder();
        } else {
            text_view.resign_first_responder();
        }
        self
    }

    fn selected_range(mut self, range: Range<usize>) -> Self {
        target_mut::<TextView, _>(&mut self).select(range);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_view::ScrollViewSetterExt;
    use crate::view::ViewSetters;
    use setkit_core::setter::Settable;

    #[test]
    fn test_text_view_chain_reaches_scroll_and_view() {
        let mut text_view = TextView::default();
        text_view
            .set()
            .text("Hello, world")
            .editable(false)
            .data_detector_types(DataDetectorTypes::LINK | DataDetectorTypes::PHONE_NUMBER)
            .scroll_disabled()
            .alpha(0.75);

        assert_eq!(text_view.text(), "Hello, world");
        assert!(!text_view.editable);
        assert!(text_view.data_detector_types.contains(DataDetectorTypes::LINK));
        assert!(!text_view.scroll_view.is_scroll_enabled());
        assert_eq!(text_view.scroll_view.view.alpha, 0.75);
    }

    #[test]
    fn test_selected_range_is_pinned_to_text() {
        let mut text_view = TextView::default();
        text_view.set().text("héllo").selected_range(1..10);
        assert_eq!(text_view.selected_range(), 1..5);

        text_view.set().selected_range(8..9);
        assert_eq!(text_view.selected_range(), 5..5);
    }

    #[test]
    fn test_first_responder_requires_interaction() {
        let mut text_view = TextView::default();
        text_view.set().editable(false).selectable(false).first_responder(true);
        assert!(!text_view.is_first_responder());

        text_view.set().selectable(true).first_responder(true);
        assert!(text_view.is_first_responder());

        text_view.set().first_responder(false);
        assert!(!text_view.is_first_responder());
    }
}
