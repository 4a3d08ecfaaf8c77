//! Grid of items driven by a flow layout

use crate::reuse::ReuseQueue;
use crate::scroll_view::ScrollView;
use crate::view::View;
use crate::widget::{target_mut, Widget};
use setkit_core::setter::{Settable, Setter};
use setkit_core::types::{Axis, EdgeInsets, Size};
use setkit_macros::Setters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderingCadence {
    #[default]
    Immediate,
    Fast,
    Slow,
}

/// Line-based layout: items fill a line, then wrap to the next
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct FlowLayout {
    pub scroll_direction: Axis,
    pub item_size: Size,
    /// Non-empty sizes switch on self-sizing cells
    pub estimated_item_size: Size,
    pub minimum_line_spacing: f32,
    pub minimum_interitem_spacing: f32,
    pub header_reference_size: Size,
    pub footer_reference_size: Size,
    pub section_inset: EdgeInsets,
    pub section_headers_pin_to_visible_bounds: bool,
    pub section_footers_pin_to_visible_bounds: bool,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            scroll_direction: Axis::Vertical,
            item_size: Size::square(50.0),
            estimated_item_size: Size::zero(),
            minimum_line_spacing: 10.0,
            minimum_interitem_spacing: 10.0,
            header_reference_size: Size::zero(),
            footer_reference_size: Size::zero(),
            section_inset: EdgeInsets::zero(),
            section_headers_pin_to_visible_bounds: false,
            section_footers_pin_to_visible_bounds: false,
        }
    }
}

impl FlowLayout {
    /// Items that fit on one line across `extent` points
    pub fn items_per_line(&self, extent: f32) -> usize {
        let (item, inset) = match self.scroll_direction {
            Axis::Vertical => (
                self.item_size.width,
                self.section_inset.left + self.section_inset.right,
            ),
            Axis::Horizontal => (
                self.item_size.height,
                self.section_inset.top + self.section_inset.bottom,
            ),
        };
        let available = extent - inset;
        if item.is_nan() || available.is_nan() || item <= 0.0 || available < item {
            return 0;
        }
        let step = item + self.minimum_interitem_spacing;
        if step <= 0.0 {
            return 1;
        }
        1usize.saturating_add(((available - item) / step) as usize)
    }
}

#[derive(Debug, Clone, Setters)]
pub struct CollectionView {
    #[set(parent, ancestors(View))]
    pub scroll_view: ScrollView,
    pub allows_selection: bool,
    pub allows_multiple_selection: bool,
    pub selection_follows_focus: bool,
    pub prefetching_enabled: bool,
    pub drag_interaction_enabled: bool,
    pub reordering_cadence: ReorderingCadence,
    pub remembers_last_focused_index_path: bool,
    #[set(skip)]
    layout: FlowLayout,
    #[set(skip)]
    cells: ReuseQueue,
}

impl Default for CollectionView {
    fn default() -> Self {
        Self {
            scroll_view: ScrollView::default(),
            allows_selection: true,
            allows_multiple_selection: false,
            selection_follows_focus: false,
            prefetching_enabled: true,
            drag_interaction_enabled: false,
            reordering_cadence: ReorderingCadence::Immediate,
            remembers_last_focused_index_path: false,
            layout: FlowLayout::default(),
            cells: ReuseQueue::default(),
        }
    }
}

impl CollectionView {
    pub fn with_layout(layout: FlowLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.cells.is_registered(identifier)
    }

    /// A cell for `identifier`; `None` for unregistered identifiers
    pub fn dequeue_reusable_cell(&mut self, identifier: &str) -> Option<Box<dyn Widget>> {
        self.cells.dequeue(identifier)
    }

    pub fn enqueue_reusable_cell(&mut self, identifier: &str, cell: Box<dyn Widget>) {
        self.cells.enqueue(identifier, cell);
    }
}

pub trait CollectionViewSetterExt: Sized {
    /// Register the cell type built for `identifier`
    fn register<C: Widget + Default>(self, identifier: impl Into<String>) -> Self;

    /// Replace the layout
    fn collection_view_layout(self, layout: FlowLayout) -> Self;

    /// Configure the current layout inline
    fn layout_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, FlowLayout>);
}

impl<'a, B> CollectionViewSetterExt for Setter<'a, B>
where
    B: AsMut<CollectionView> + ?Sized,
{
    fn register<C: Widget + Default>(mut self, identifier: impl Into<String>) -> Self {
        target_mut::<CollectionView, _>(&mut self).cells.register::<C>(identifier);
        self
    }

    fn collection_view_layout(mut self, layout: FlowLayout) -> Self {
        let collection = target_mut::<CollectionView, _>(&mut self);
        collection.layout = layout;
        collection.scroll_view.view.set_needs_layout();
        self
    }

    fn layout_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, FlowLayout>),
    {
        let collection = target_mut::<CollectionView, _>(&mut self);
        configure(collection.layout.set());
        collection.scroll_view.view.set_needs_layout();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection_view_cell::CollectionViewCell;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_properties() {
        let mut collection = CollectionView::default();
        collection
            .set()
            .register::<CollectionViewCell>("photo")
            .allows_multiple_selection(true)
            .layout_properties(|layout| {
                layout
                    .item_size(Size::square(100.0))
                    .minimum_interitem_spacing(4.0)
                    .section_inset(EdgeInsets::symmetric(0.0, 8.0));
            });

        assert!(collection.is_registered("photo"));
        assert!(collection.allows_multiple_selection);
        assert_eq!(collection.layout().item_size, Size::square(100.0));
        assert_eq!(collection.layout().items_per_line(320.0), 2);
        assert!(collection.scroll_view.view.needs_layout());
    }

    #[test]
    fn test_replace_layout() {
        let mut horizontal = FlowLayout::default();
        horizontal.set().scroll_direction(Axis::Horizontal);

        let mut collection = CollectionView::default();
        collection.set().collection_view_layout(horizontal.clone());
        assert_eq!(collection.layout(), &horizontal);

        let cell = collection.dequeue_reusable_cell("photo");
        assert!(cell.is_none());
    }

    #[test]
    fn test_items_per_line() {
        let layout = FlowLayout::default();
        assert_eq!(layout.items_per_line(50.0), 1);
        assert_eq!(layout.items_per_line(170.0), 3);
        assert_eq!(layout.items_per_line(40.0), 0);
    }

    #[test]
    fn test_items_per_line_with_degenerate_spacing() {
        let mut layout = FlowLayout::default();
        layout
            .set()
            .item_size(Size::square(10.0))
            .minimum_interitem_spacing(-10.0);
        assert_eq!(layout.items_per_line(50.0), 1);

        layout.set().minimum_interitem_spacing(-30.0);
        assert_eq!(layout.items_per_line(50.0), 1);
        assert_eq!(layout.items_per_line(f32::NAN), 0);
    }
}
