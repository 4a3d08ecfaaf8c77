//! Row cell for table views

use crate::view::View;
use crate::widget::{target_mut, Widget};
use setkit_core::setter::{Settable, Setter};
use setkit_core::types::EdgeInsets;
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessoryType {
    #[default]
    None,
    DisclosureIndicator,
    DetailDisclosureButton,
    Checkmark,
    DetailButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellSelectionStyle {
    None,
    Blue,
    Gray,
    #[default]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFocusStyle {
    #[default]
    Default,
    Custom,
}

#[derive(Debug, Clone, Setters)]
pub struct TableViewCell {
    #[set(parent)]
    pub view: View,
    pub accessory_type: AccessoryType,
    pub editing_accessory_type: AccessoryType,
    pub selection_style: CellSelectionStyle,
    pub focus_style: CellFocusStyle,
    pub indentation_level: usize,
    pub indentation_width: f32,
    pub shows_reorder_control: bool,
    pub should_indent_while_editing: bool,
    pub separator_inset: EdgeInsets,
    pub user_interaction_enabled_while_dragging: bool,
    pub automatically_updates_content_configuration: bool,
    #[set(skip)]
    content_view: View,
    #[set(skip)]
    accessory_view: Option<Box<dyn Widget>>,
    #[set(skip)]
    reuse_identifier: Option<String>,
    #[set(skip)]
    selected: bool,
    #[set(skip)]
    highlighted: bool,
    #[set(skip)]
    editing: bool,
    #[set(skip)]
    configuration_updates: u32,
}

impl Default for TableViewCell {
    fn default() -> Self {
        Self {
            view: View::default(),
            accessory_type: AccessoryType::None,
            editing_accessory_type: AccessoryType::None,
            selection_style: CellSelectionStyle::Default,
            focus_style: CellFocusStyle::Default,
            indentation_level: 0,
            indentation_width: 10.0,
            shows_reorder_control: false,
            should_indent_while_editing: true,
            separator_inset: EdgeInsets::new(0.0, 16.0, 0.0, 0.0),
            user_interaction_enabled_while_dragging: false,
            automatically_updates_content_configuration: true,
            content_view: View::default(),
            accessory_view: None,
            reuse_identifier: None,
            selected: false,
            highlighted: false,
            editing: false,
            configuration_updates: 0,
        }
    }
}

impl TableViewCell {
    /// View that holds the cell's content, inside the accessory area
    pub fn content_view(&self) -> &View {
        &self.content_view
    }

    pub fn content_view_mut(&mut self) -> &mut View {
        &mut self.content_view
    }

    pub fn accessory_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.accessory_view.as_deref()
    }

    pub fn reuse_identifier(&self) -> Option<&str> {
        self.reuse_identifier.as_deref()
    }

    pub(crate) fn set_reuse_identifier(&mut self, identifier: &str) {
        self.reuse_identifier = Some(identifier.to_string());
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Leading indentation of the content
    pub fn indentation(&self) -> f32 {
        self.indentation_level as f32 * self.indentation_width
    }

    /// Configuration refreshes requested so far
    pub fn configuration_updates(&self) -> u32 {
        self.configuration_updates
    }

    /// Reset transient state before the cell is handed out again
    pub fn prepare_for_reuse(&mut self) {
        self.selected = false;
        self.highlighted = false;
        self.editing = false;
    }
}

pub trait TableViewCellSetterExt: Sized {
    fn selected_animated(self, selected: bool, animated: bool) -> Self;

    fn highlighted_animated(self, highlighted: bool, animated: bool) -> Self;

    fn editing_animated(self, editing: bool, animated: bool) -> Self;

    fn accessory_view(self, view: impl Widget) -> Self;

    /// Configure the content view inline
    fn content_view_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, View>);

    /// Request a configuration refresh for the current state
    fn needs_update_configuration(self) -> Self;
}

impl<'a, B> TableViewCellSetterExt for Setter<'a, B>
where
    B: AsMut<TableViewCell> + ?Sized,
{
    fn selected_animated(mut self, selected: bool, animated: bool) -> Self {
        target_mut::<TableViewCell, _>(&mut self).selected = selected;
        tracing::trace!(target: "setkit::setter", widget = "TableViewCell", selected, animated);
        self
    }

    fn highlighted_animated(mut self, highlighted: bool, animated: bool) -> Self {
        target_mut::<TableViewCell, _>(&mut self).highlighted = highlighted;
        tracing::trace!(target: "setkit::setter", widget = "TableViewCell", highlighted, animated);
        self
    }

    fn editing_animated(mut self, editing: bool, animated: bool) -> Self {
        target_mut::<TableViewCell, _>(&mut self).editing = editing;
        tracing::trace!(target: "setkit::setter", widget = "TableViewCell", editing, animated);
        self
    }

    fn accessory_view(mut self, view: impl Widget) -> Self {
        target_mut::<TableViewCell, _>(&mut self).accessory_view = Some(Box::new(view));
        self
    }

    fn content_view_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, View>),
    {
        configure(target_mut::<TableViewCell, _>(&mut self).content_view.set());
        self
    }

    fn needs_update_configuration(mut self) -> Self {
        let cell = target_mut::<TableViewCell, _>(&mut self);
        cell.configuration_updates += 1;
        cell.view.set_needs_display();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::view::{ViewSetterExt, ViewSetters};
    use setkit_core::types::Color;

    #[test]
    fn test_animated_state_setters() {
        let mut cell = TableViewCell::default();
        cell.set()
            .selected_animated(true, true)
            .highlighted_animated(true, false)
            .editing_animated(true, true)
            .accessory_type(AccessoryType::Checkmark);

        assert!(cell.is_selected());
        assert!(cell.is_highlighted());
        assert!(cell.is_editing());
        assert_eq!(cell.accessory_type, AccessoryType::Checkmark);

        cell.prepare_for_reuse();
        assert!(!cell.is_selected() && !cell.is_highlighted() && !cell.is_editing());
    }

    #[test]
    fn test_content_view_properties() {
        let mut cell = TableViewCell::default();
        cell.set()
            .background_color(Color::WHITE)
            .content_view_properties(|content| {
                content.subview(Label::new("Row 1")).alpha(0.5);
            })
            .indentation_level(2);

        assert_eq!(cell.content_view().subviews().len(), 1);
        assert_eq!(cell.content_view().alpha, 0.5);
        assert_eq!(cell.view.alpha, 1.0);
        assert_eq!(cell.indentation(), 20.0);
    }

    #[test]
    fn test_needs_update_configuration() {
        let mut cell = TableViewCell::default();
        cell.set().needs_update_configuration().needs_update_configuration();
        assert_eq!(cell.configuration_updates(), 2);
        assert!(cell.view.needs_display());
    }
}
