//! Spinning-wheel picker

use crate::view::View;
use crate::widget::target_mut;
use setkit_core::setter::Setter;
use setkit_macros::Setters;

#[derive(Debug, Clone, Default, Setters)]
pub struct PickerView {
    #[set(parent)]
    pub view: View,
    pub number_of_components: usize,
    #[set(skip)]
    selected_rows: Vec<usize>,
}

impl PickerView {
    /// Selected row of a component; components start on row 0
    pub fn selected_row(&self, component: usize) -> usize {
        self.selected_rows.get(component).copied().unwrap_or(0)
    }

    /// Select `row` in `component`; components past `number_of_components`
    /// are ignored
    pub fn select_row(&mut self, row: usize, component: usize) {
        if component >= self.number_of_components {
            tracing::debug!(
                target: "setkit::setter",
                widget = "PickerView",
                component,
                components = self.number_of_components,
                "component out of range, selection ignored"
            );
            return;
        }
        if component >= self.selected_rows.len() {
            self.selected_rows.resize(component + 1, 0);
        }
        self.selected_rows[component] = row;
    }
}

pub trait PickerViewSetterExt: Sized {
    fn row_selected(self, row: usize, component: usize, animated: bool) -> Self;
}

impl<'a, B> PickerViewSetterExt for Setter<'a, B>
where
    B: AsMut<PickerView> + ?Sized,
{
    fn row_selected(mut self, row: usize, component: usize, animated: bool) -> Self {
        target_mut::<PickerView, _>(&mut self).select_row(row, component);
        tracing::trace!(target: "setkit::setter", widget = "PickerView", row, component, animated);
        self
    }
}
