//! Scrolling list of rows grouped in sections

use crate::reuse::ReuseQueue;
use crate::scroll_view::ScrollView;
use crate::table_view_cell::TableViewCell;
use crate::view::View;
use crate::widget::{target_mut, Widget};
use setkit_core::setter::Setter;
use setkit_core::types::{Color, EdgeInsets};
use setkit_macros::Setters;

/// Row height resolved by auto layout
pub const AUTOMATIC_DIMENSION: f32 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableViewStyle {
    #[default]
    Plain,
    Grouped,
    InsetGrouped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorStyle {
    None,
    #[default]
    SingleLine,
}

#[derive(Debug, Clone, Setters)]
pub struct TableView {
    #[set(parent, ancestors(View))]
    pub scroll_view: ScrollView,
    pub style: TableViewStyle,
    pub row_height: f32,
    pub estimated_row_height: f32,
    pub section_header_height: f32,
    pub section_footer_height: f32,
    pub estimated_section_header_height: f32,
    pub estimated_section_footer_height: f32,
    pub separator_style: SeparatorStyle,
    #[set(strip_option)]
    pub separator_color: Option<Color>,
    pub separator_inset: EdgeInsets,
    pub allows_selection: bool,
    pub allows_multiple_selection: bool,
    pub allows_selection_during_editing: bool,
    pub allows_multiple_selection_during_editing: bool,
    pub section_index_minimum_display_row_count: usize,
    #[set(strip_option)]
    pub section_index_color: Option<Color>,
    #[set(strip_option)]
    pub section_index_background_color: Option<Color>,
    #[set(strip_option)]
    pub section_index_tracking_background_color: Option<Color>,
    pub cell_layout_margins_follow_readable_width: bool,
    pub remembers_last_focused_index_path: bool,
    #[set(skip)]
    editing: bool,
    #[set(skip)]
    cells: ReuseQueue,
    #[set(skip)]
    table_header_view: Option<Box<dyn Widget>>,
    #[set(skip)]
    table_footer_view: Option<Box<dyn Widget>>,
    #[set(skip)]
    background_view: Option<Box<dyn Widget>>,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            scroll_view: ScrollView::default(),
            style: TableViewStyle::Plain,
            row_height: AUTOMATIC_DIMENSION,
            estimated_row_height: AUTOMATIC_DIMENSION,
            section_header_height: AUTOMATIC_DIMENSION,
            section_footer_height: AUTOMATIC_DIMENSION,
            estimated_section_header_height: AUTOMATIC_DIMENSION,
            estimated_section_footer_height: AUTOMATIC_DIMENSION,
            separator_style: SeparatorStyle::SingleLine,
            separator_color: None,
            separator_inset: EdgeInsets::new(0.0, 16.0, 0.0, 0.0),
            allows_selection: true,
            allows_multiple_selection: false,
            allows_selection_during_editing: false,
            allows_multiple_selection_during_editing: false,
            section_index_minimum_display_row_count: 0,
            section_index_color: None,
            section_index_background_color: None,
            section_index_tracking_background_color: None,
            cell_layout_margins_follow_readable_width: false,
            remembers_last_focused_index_path: false,
            editing: false,
            cells: ReuseQueue::default(),
            table_header_view: None,
            table_footer_view: None,
            background_view: None,
        }
    }
}

impl TableView {
    pub fn with_style(style: TableViewStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn table_header_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.table_header_view.as_deref()
    }

    pub fn table_footer_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.table_footer_view.as_deref()
    }

    pub fn background_view(&self) -> Option<&(dyn Widget + 'static)> {
        self.background_view.as_deref()
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.cells.is_registered(identifier)
    }

    /// A cell for `identifier`, recycled when one is waiting
    ///
    /// Table cells come back with their reuse identifier set and their
    /// transient state reset. Returns `None` for unregistered identifiers.
    pub fn dequeue_reusable_cell(&mut self, identifier: &str) -> Option<Box<dyn Widget>> {
        let mut cell = self.cells.dequeue(identifier)?;
        if let Some(table_cell) = cell.downcast_mut::<TableViewCell>() {
            table_cell.set_reuse_identifier(identifier);
            table_cell.prepare_for_reuse();
        }
        Some(cell)
    }

    /// Hand a cell back for reuse
    pub fn enqueue_reusable_cell(&mut self, identifier: &str, cell: Box<dyn Widget>) {
        self.cells.enqueue(identifier, cell);
    }
}

pub trait TableViewSetterExt: Sized {
    /// Register the cell type built for `identifier`
    fn register<C: Widget + Default>(self, identifier: impl Into<String>) -> Self;

    fn table_header_view(self, view: impl Widget) -> Self;

    fn table_footer_view(self, view: impl Widget) -> Self;

    fn background_view(self, view: impl Widget) -> Self;

    fn editing_animated(self, editing: bool, animated: bool) -> Self;
}

impl<'a, B> TableViewSetterExt for Setter<'a, B>
where
    B: AsMut<TableView> + ?Sized,
{
    fn register<C: Widget + Default>(mut self, identifier: impl Into<String>) -> Self {
        target_mut::<TableView, _>(&mut self).cells.register::<C>(identifier);
        self
    }

    fn table_header_view(mut self, view: impl Widget) -> Self {
        target_mut::<TableView, _>(&mut self).table_header_view = Some(Box::new(view));
        self
    }

    fn table_footer_view(mut self, view: impl Widget) -> Self {
        target_mut::<TableView, _>(&mut self).table_footer_view = Some(Box::new(view));
        self
    }

    fn background_view(mut self, view: impl Widget) -> Self {
        target_mut::<TableView, _>(&mut self).background_view = Some(Box::new(view));
        self
    }

    fn editing_animated(mut self, editing: bool, animated: bool) -> Self {
        target_mut::<TableView, _>(&mut self).editing = editing;
        tracing::trace!(target: "setkit::setter", widget = "TableView", editing, animated);
        self
    }
}
