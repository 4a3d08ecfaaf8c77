//! The root widget family
//!
//! [`View`] carries the geometry, appearance and hierarchy every other widget
//! embeds. Plain properties come from `#[derive(Setters)]` as [`ViewSetters`];
//! layer styling, hierarchy changes and layout requests live in
//! [`ViewSetterExt`]. Both apply to any target that can be viewed as a
//! `View`, including `dyn Widget`.

use crate::widget::{target_mut, Widget, WidgetId};
use setkit_core::config;
use setkit_core::setter::{Settable, Setter};
use setkit_core::shape::{CornerMask, ViewShape};
use setkit_core::types::{Color, Offset, Point, Rect, Size, Transform, UserInterfaceStyle};
use setkit_macros::Setters;

/// How content is laid out inside a view's bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    #[default]
    ScaleToFill,
    ScaleAspectFit,
    ScaleAspectFill,
    Redraw,
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// Pointer interactions attached to a view
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Pointer,
    ContextMenu,
    Drag,
    Drop,
}

/// Effect shown while a pointer hovers a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverEffect {
    #[default]
    Automatic,
    Highlight,
    Lift,
}

/// Hover effect plus the shape it is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverStyle {
    pub effect: HoverEffect,
    pub shape: Option<ViewShape>,
}

/// Backing layer of a view
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct Layer {
    pub corner_radius: f32,
    pub masked_corners: CornerMask,
    pub border_width: f32,
    #[set(strip_option)]
    pub border_color: Option<Color>,
    #[set(strip_option)]
    pub shadow_color: Option<Color>,
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    pub shadow_offset: Offset,
    /// Explicit outline the shadow is rendered from
    #[set(strip_option)]
    pub shadow_path: Option<Rect>,
    pub should_rasterize: bool,
    pub rasterization_scale: f32,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            corner_radius: 0.0,
            masked_corners: CornerMask::all(),
            border_width: 0.0,
            border_color: None,
            shadow_color: None,
            shadow_opacity: 0.0,
            shadow_radius: 3.0,
            shadow_offset: Offset::new(0.0, -3.0),
            shadow_path: None,
            should_rasterize: false,
            rasterization_scale: 1.0,
        }
    }
}

/// Rectangular region of a view hierarchy
#[derive(Debug, Clone, Setters)]
pub struct View {
    #[set(skip)]
    id: WidgetId,
    pub tag: i64,
    pub opaque: bool,
    pub hidden: bool,
    pub multiple_touch_enabled: bool,
    pub user_interaction_enabled: bool,
    pub content_mode: ContentMode,
    /// Position and size in the superview's coordinate space
    pub frame: Rect,
    /// Position and size in the view's own coordinate space
    pub bounds: Rect,
    pub center: Point,
    pub alpha: f32,
    pub content_scale_factor: f32,
    pub translates_autoresizing_mask_into_constraints: bool,
    pub autoresizes_subviews: bool,
    #[set(into, strip_option)]
    pub accessibility_identifier: Option<String>,
    pub clips_to_bounds: bool,
    /// Light or dark override for this view and its subviews
    pub user_interface_style: UserInterfaceStyle,
    #[set(strip_option)]
    pub background_color: Option<Color>,
    #[set(strip_option)]
    pub tint_color: Option<Color>,
    pub transform: Transform,
    #[set(into, strip_option)]
    pub large_content_title: Option<String>,
    #[set(feature = "pointer-interactions")]
    pub interactions: Vec<Interaction>,
    #[set(strip_option, feature = "pointer-interactions")]
    pub hover_style: Option<HoverStyle>,
    #[set(skip)]
    pub layer: Layer,
    #[set(skip)]
    subviews: Vec<Box<dyn Widget>>,
    #[set(skip)]
    layout_pending: bool,
    #[set(skip)]
    layout_passes: u32,
    #[set(skip)]
    display_pending: bool,
    #[set(skip)]
    dirty_rect: Option<Rect>,
}

impl Default for View {
    fn default() -> Self {
        Self {
            id: WidgetId::new(),
            tag: 0,
            opaque: true,
            hidden: false,
            multiple_touch_enabled: false,
            user_interaction_enabled: true,
            content_mode: ContentMode::default(),
            frame: Rect::zero(),
            bounds: Rect::zero(),
            center: Point::zero(),
            alpha: 1.0,
            content_scale_factor: config::screen_scale(),
            translates_autoresizing_mask_into_constraints: true,
            autoresizes_subviews: true,
            accessibility_identifier: None,
            clips_to_bounds: false,
            user_interface_style: UserInterfaceStyle::Unspecified,
            background_color: None,
            tint_color: None,
            transform: Transform::identity(),
            large_content_title: None,
            interactions: Vec::new(),
            hover_style: None,
            layer: Layer::default(),
            subviews: Vec::new(),
            layout_pending: false,
            layout_passes: 0,
            display_pending: false,
            dirty_rect: None,
        }
    }
}

impl View {
    /// View with the given frame; bounds and center follow from it
    pub fn with_frame(frame: Rect) -> Self {
        let mut view = Self::default();
        view.set_frame(frame);
        view
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Move and resize, keeping bounds and center consistent
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.bounds = self.bounds.with_size(frame.size());
        self.center = frame.center();
    }

    pub fn subviews(&self) -> &[Box<dyn Widget>] {
        &self.subviews
    }

    pub fn subviews_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.subviews
    }

    pub fn add_subview(&mut self, subview: Box<dyn Widget>) {
        tracing::trace!(
            target: "setkit::widgets",
            parent = %self.id,
            child = %subview.view().id(),
            kind = subview.type_name(),
            "add subview"
        );
        self.subviews.push(subview);
    }

    /// Detach and return the subview with the given id
    pub fn remove_subview(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.subviews.iter().position(|s| s.view().id() == id)?;
        Some(self.subviews.remove(index))
    }

    /// Depth-first search through the hierarchy below this view
    pub fn find(&self, id: WidgetId) -> Option<&(dyn Widget + 'static)> {
        self.subviews.iter().find_map(|subview| {
            if subview.view().id() == id {
                Some(&**subview)
            } else {
                subview.view().find(id)
            }
        })
    }

    pub fn set_needs_layout(&mut self) {
        self.layout_pending = true;
    }

    /// Run a pending layout pass over this view and its subviews
    pub fn layout_if_needed(&mut self) {
        if self.layout_pending {
            self.layout_pending = false;
            self.layout_passes += 1;
        }
        for subview in &mut self.subviews {
            subview.view_mut().layout_if_needed();
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.layout_pending
    }

    /// Completed layout passes
    pub fn layout_passes(&self) -> u32 {
        self.layout_passes
    }

    /// Mark the whole view for redraw
    pub fn set_needs_display(&mut self) {
        self.display_pending = true;
        self.dirty_rect = Some(Rect::from_size(self.bounds.size()));
    }

    /// Mark part of the view for redraw
    pub fn set_needs_display_in(&mut self, rect: Rect) {
        self.display_pending = true;
        self.dirty_rect = Some(match self.dirty_rect {
            Some(dirty) => union(dirty, rect),
            None => rect,
        });
    }

    pub fn needs_display(&self) -> bool {
        self.display_pending
    }

    /// Region waiting to be redrawn
    pub fn dirty_rect(&self) -> Option<Rect> {
        self.dirty_rect
    }

    /// Smallest size enclosing every subview frame
    pub fn size_that_fits(&self) -> Size {
        self.subviews
            .iter()
            .map(|subview| subview.view().frame)
            .fold(Size::zero(), |size, frame| {
                Size::new(
                    size.width.max(frame.x + frame.width),
                    size.height.max(frame.y + frame.height),
                )
            })
    }

    /// Resize to [`View::size_that_fits`], keeping the origin
    pub fn size_to_fit(&mut self) {
        let size = self.size_that_fits();
        self.set_frame(self.frame.with_size(size));
    }
}

fn union(a: Rect, b: Rect) -> Rect {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let right = (a.x + a.width).max(b.x + b.width);
    let bottom = (a.y + a.height).max(b.y + b.height);
    Rect::new(x, y, right - x, bottom - y)
}

/// Layer, hierarchy and layout setters for every view family
pub trait ViewSetterExt: Sized {
    /// Round the corners according to `shape`
    ///
    /// Also turns on `clips_to_bounds`. [`ViewShape::Circle`] reads the
    /// current bounds, so apply it after the final size is known.
    fn corners(self, shape: ViewShape) -> Self;

    /// Add subviews in order
    ///
    /// Every child has `translates_autoresizing_mask_into_constraints`
    /// switched off before it is attached.
    fn subviews<I>(self, subviews: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Widget>>;

    /// Add one subview, see [`ViewSetterExt::subviews`]
    fn subview(self, subview: impl Widget) -> Self;

    fn border_width(self, width: f32) -> Self;

    fn border_color(self, color: Color) -> Self;

    /// Drop shadow rendered from the current bounds
    ///
    /// Disables clipping and rasterizes the layer at the configured screen
    /// scale.
    fn shadow(self, radius: f32, opacity: f32, color: Color, offset: Offset) -> Self;

    /// Configure the backing layer in place
    fn layer_properties<F>(self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, Layer>);

    fn needs_layout(self) -> Self;

    fn layout_if_needed(self) -> Self;

    fn needs_display(self) -> Self;

    fn needs_display_in(self, rect: Rect) -> Self;

    fn size_to_fit(self) -> Self;
}

impl<'a, B> ViewSetterExt for Setter<'a, B>
where
    B: AsMut<View> + ?Sized,
{
    fn corners(mut self, shape: ViewShape) -> Self {
        let view = target_mut::<View, _>(&mut self);
        let style = shape.resolve(view.bounds.size());
        view.clips_to_bounds = true;
        view.layer.corner_radius = style.radius;
        if let Some(corners) = style.corners {
            view.layer.masked_corners = corners;
        }
        tracing::trace!(target: "setkit::setter", ?shape, radius = style.radius, "corners");
        self
    }

    fn subviews<I>(mut self, subviews: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Widget>>,
    {
        let view = target_mut::<View, _>(&mut self);
        for mut subview in subviews {
            subview.view_mut().translates_autoresizing_mask_into_constraints = false;
            view.add_subview(subview);
        }
        self
    }

    fn subview(self, subview: impl Widget) -> Self {
        self.subviews([Box::new(subview) as Box<dyn Widget>])
    }

    fn border_width(mut self, width: f32) -> Self {
        target_mut::<View, _>(&mut self).layer.border_width = width;
        self
    }

    fn border_color(mut self, color: Color) -> Self {
        target_mut::<View, _>(&mut self).layer.border_color = Some(color);
        self
    }

    fn shadow(mut self, radius: f32, opacity: f32, color: Color, offset: Offset) -> Self {
        let view = target_mut::<View, _>(&mut self);
        view.clips_to_bounds = false;
        let bounds = view.bounds;
        let layer = &mut view.layer;
        layer.shadow_color = Some(color);
        layer.shadow_radius = radius;
        layer.shadow_opacity = opacity;
        layer.shadow_offset = offset;
        layer.shadow_path = Some(bounds);
        layer.rasterization_scale = config::screen_scale();
        layer.should_rasterize = true;
        self
    }

    fn layer_properties<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(Setter<'_, Layer>),
    {
        configure(target_mut::<View, _>(&mut self).layer.set());
        self
    }

    fn needs_layout(mut self) -> Self {
        target_mut::<View, _>(&mut self).set_needs_layout();
        self
    }

    fn layout_if_needed(mut self) -> Self {
        target_mut::<View, _>(&mut self).layout_if_needed();
        self
    }

    fn needs_display(mut self) -> Self {
        target_mut::<View, _>(&mut self).set_needs_display();
        self
    }

    fn needs_display_in(mut self, rect: Rect) -> Self {
        target_mut::<View, _>(&mut self).set_needs_display_in(rect);
        self
    }

    fn size_to_fit(mut self) -> Self {
        target_mut::<View, _>(&mut self).size_to_fit();
        self
    }
}
