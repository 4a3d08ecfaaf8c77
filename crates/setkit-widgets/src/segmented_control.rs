//! Horizontal row of segments
//!
//! Per-segment setters address segments by index. Addressing a segment past
//! the end appends empty segments up to it.

use crate::control::Control;
use crate::view::View;
use crate::widget::{target_mut, Action};
use setkit_core::setter::Setter;
use setkit_core::types::{Color, Image, Offset};
use setkit_macros::Setters;

#[derive(Debug, Clone)]
pub struct Segment {
    pub title: Option<String>,
    pub image: Option<Image>,
    pub enabled: bool,
    /// Zero sizes the segment automatically
    pub width: f32,
    pub content_offset: Offset,
    pub action: Option<Action>,
}

impl Default for Segment {
    fn default() -> Self {
        Self {
            title: None,
            image: None,
            enabled: true,
            width: 0.0,
            content_offset: Offset::default(),
            action: None,
        }
    }
}

#[derive(Debug, Clone, Default, Setters)]
pub struct SegmentedControl {
    #[set(parent, ancestors(View))]
    pub control: Control,
    /// `None` when no segment is selected
    pub selected_segment_index: Option<usize>,
    /// Segments do not stay selected after a tap
    pub momentary: bool,
    pub apportions_segment_widths_by_content: bool,
    #[set(strip_option)]
    pub selected_segment_tint_color: Option<Color>,
    #[set(skip)]
    segments: Vec<Segment>,
}

impl SegmentedControl {
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = titles
            .into_iter()
            .map(|title| Segment {
                title: Some(title.into()),
                ..Segment::default()
            })
            .collect();
        Self {
            segments,
            ..Self::default()
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    /// Segment at `index`, appending defaults until it exists
    pub fn segment_mut(&mut self, index: usize) -> &mut Segment {
        if index >= self.segments.len() {
            self.segments.resize_with(index + 1, Segment::default);
        }
        &mut self.segments[index]
    }

    /// Select a segment as a tap would, running its action
    ///
    /// Disabled or missing segments are ignored. Momentary controls run the
    /// action without keeping the selection.
    pub fn tap_segment(&mut self, index: usize) -> bool {
        let Some(segment) = self.segments.get(index) else {
            return false;
        };
        if !segment.enabled {
            return false;
        }
        if let Some(action) = &segment.action {
            action.call();
        }
        if !self.momentary {
            self.selected_segment_index = Some(index);
        }
        true
    }
}

pub trait SegmentedControlSetterExt: Sized {
    fn segment_title(self, title: impl Into<String>, index: usize) -> Self;

    fn segment_image(self, image: Image, index: usize) -> Self;

    fn segment_enabled(self, enabled: bool, index: usize) -> Self;

    fn segment_width(self, width: f32, index: usize) -> Self;

    fn segment_content_offset(self, offset: Offset, index: usize) -> Self;

    /// Action run when the segment is tapped
    fn segment_action(self, action: Action, index: usize) -> Self;
}

impl<'a, B> SegmentedControlSetterExt for Setter<'a, B>
where
    B: AsMut<SegmentedControl> + ?Sized,
{
    fn segment_title(mut self, title: impl Into<String>, index: usize) -> Self {
        target_mut::<SegmentedControl, _>(&mut self).segment_mut(index).title = Some(title.into());
        self
    }

    fn segment_image(mut self, image: Image, index: usize) -> Self {
        target_mut::<SegmentedControl, _>(&mut self).segment_mut(index).image = Some(image);
        self
    }

    fn segment_enabled(mut self, enabled: bool, index: usize) -> Self {
        target_mut::<SegmentedControl, _>(&mut self).segment_mut(index).enabled = enabled;
        self
    }

    fn segment_width(mut self, width: f32, index: usize) -> Self {
        target_mut::<SegmentedControl, _>(&mut self).segment_mut(index).width = width;
        self
    }

    fn segment_content_offset(mut self, offset: Offset, index: usize) -> Self {
        target_mut::<SegmentedControl, _>(&mut self)
            .segment_mut(index)
            .content_offset = offset;
        self
    }

    fn segment_action(mut self, action: Action, index: usize) -> Self {
        target_mut::<SegmentedControl, _>(&mut self).segment_mut(index).action = Some(action);
        self
    }
}
