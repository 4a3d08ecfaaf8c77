//! Linear arrangement of subviews

use crate::view::View;
use crate::widget::{target_mut, Widget, WidgetId};
use setkit_core::setter::Setter;
use setkit_core::types::Axis;
use setkit_macros::Setters;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackAlignment {
    #[default]
    Fill,
    Leading,
    FirstBaseline,
    Center,
    Trailing,
    LastBaseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackDistribution {
    #[default]
    Fill,
    FillEqually,
    FillProportionally,
    EqualSpacing,
    EqualCentering,
}

#[derive(Debug, Clone, Default, Setters)]
pub struct StackView {
    #[set(parent)]
    pub view: View,
    pub axis: Axis,
    pub alignment: StackAlignment,
    pub distribution: StackDistribution,
    /// Gap between adjacent arranged subviews
    pub spacing: f32,
    pub layout_margins_relative_arrangement: bool,
    pub baseline_relative_arrangement: bool,
    #[set(skip)]
    arranged: Vec<WidgetId>,
    #[set(skip)]
    custom_spacing: HashMap<WidgetId, f32>,
}

impl StackView {
    /// Ids of the arranged subviews in stacking order
    pub fn arranged_subviews(&self) -> &[WidgetId] {
        &self.arranged
    }

    /// Add a subview and append it to the arrangement
    pub fn add_arranged_subview(&mut self, mut subview: Box<dyn Widget>) {
        subview.view_mut().translates_autoresizing_mask_into_constraints = false;
        self.arranged.push(subview.view().id());
        self.view.add_subview(subview);
        self.view.set_needs_layout();
    }

    /// Spacing after an arranged subview, falling back to `spacing`
    pub fn spacing_after(&self, id: WidgetId) -> f32 {
        self.custom_spacing.get(&id).copied().unwrap_or(self.spacing)
    }

    /// Override the gap after one arranged subview
    ///
    /// Ignored for views that are not arranged in this stack.
    pub fn set_custom_spacing(&mut self, spacing: f32, after: WidgetId) {
        if !self.arranged.contains(&after) {
            tracing::debug!(
                target: "setkit::setter",
                widget = "StackView",
                %after,
                "custom spacing after a view that is not arranged"
            );
            return;
        }
        self.custom_spacing.insert(after, spacing);
        self.view.set_needs_layout();
    }
}

pub trait StackViewSetterExt: Sized {
    fn arranged_subview(self, subview: impl Widget) -> Self;

    fn arranged_subviews<I>(self, subviews: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Widget>>;

    fn custom_spacing(self, spacing: f32, after: WidgetId) -> Self;
}

impl<'a, B> StackViewSetterExt for Setter<'a, B>
where
    B: AsMut<StackView> + ?Sized,
{
    fn arranged_subview(self, subview: impl Widget) -> Self {
        self.arranged_subviews([Box::new(subview) as Box<dyn Widget>])
    }

    fn arranged_subviews<I>(mut self, subviews: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Widget>>,
    {
        let stack = target_mut::<StackView, _>(&mut self);
        for subview in subviews {
            stack.add_arranged_subview(subview);
        }
        self
    }

    fn custom_spacing(mut self, spacing: f32, after: WidgetId) -> Self {
        target_mut::<StackView, _>(&mut self).set_custom_spacing(spacing, after);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use pretty_assertions::assert_eq;
    use setkit_core::setter::Settable;

    #[test]
    fn test_arranged_subviews_keep_order() {
        let first = Label::new("first");
        let second = Label::new("second");
        let ids = vec![first.view.id(), second.view.id()];

        let mut stack = StackView::default();
        stack
            .set()
            .axis(Axis::Vertical)
            .spacing(8.0)
            .arranged_subviews([Box::new(first) as Box<dyn Widget>, Box::new(second)]);

        assert_eq!(stack.arranged_subviews(), ids.as_slice());
        assert_eq!(stack.view.subviews().len(), 2);
        assert!(stack
            .view
            .subviews()
            .iter()
            .all(|s| !s.view().translates_autoresizing_mask_into_constraints));
        assert!(stack.view.needs_layout());
    }

    #[test]
    fn test_custom_spacing_only_for_arranged_views() {
        let label = Label::new("title");
        let id = label.view.id();
        let stranger = WidgetId::new();

        let mut stack = StackView::default();
        stack
            .set()
            .spacing(4.0)
            .arranged_subview(label)
            .custom_spacing(20.0, id)
            .custom_spacing(30.0, stranger);

        assert_eq!(stack.spacing_after(id), 20.0);
        assert_eq!(stack.spacing_after(stranger), 4.0);
    }
}
