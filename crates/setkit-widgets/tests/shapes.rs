//! Corner shapes and shadows applied through setters

use pretty_assertions::assert_eq;
use setkit_widgets::prelude::*;

fn sized(width: f32, height: f32) -> View {
    View::with_frame(Rect::new(0.0, 0.0, width, height))
}

#[test]
fn test_circle_on_square_view() {
    let mut view = sized(80.0, 80.0);
    view.set().corners(ViewShape::Circle);

    assert_eq!(view.layer.corner_radius, 40.0);
    assert_eq!(view.layer.masked_corners, CornerMask::all());
    assert!(view.clips_to_bounds);
}

#[test]
fn test_circle_on_wide_view_is_a_capsule() {
    let mut view = sized(200.0, 44.0);
    view.set().corners(ViewShape::Circle);
    assert_eq!(view.layer.corner_radius, 22.0);
}

#[test]
fn test_circle_resolves_against_bounds_at_call_time() {
    let mut view = View::default();
    view.set().corners(ViewShape::Circle);
    assert_eq!(view.layer.corner_radius, 0.0);

    view.set_frame(Rect::new(0.0, 0.0, 60.0, 60.0));
    view.set().corners(ViewShape::Circle);
    assert_eq!(view.layer.corner_radius, 30.0);
}

#[test]
fn test_circle_keeps_the_existing_corner_mask() {
    let mut view = sized(50.0, 50.0);
    view.set()
        .corners(ViewShape::rounded(8.0, CornerMask::TOP))
        .corners(ViewShape::Circle);

    assert_eq!(view.layer.corner_radius, 25.0);
    assert_eq!(view.layer.masked_corners, CornerMask::TOP);
}

#[test]
fn test_rounded_subset_of_corners() {
    let mut card = sized(300.0, 120.0);
    card.set().corners(ViewShape::rounded(16.0, CornerMask::TOP));

    assert_eq!(card.layer.corner_radius, 16.0);
    assert_eq!(
        card.layer.masked_corners,
        CornerMask::TOP_LEFT | CornerMask::TOP_RIGHT
    );
}

#[test]
fn test_negative_radius_passes_through() {
    let mut view = sized(10.0, 10.0);
    view.set().corners(ViewShape::RoundedRect(-4.0));
    assert_eq!(view.layer.corner_radius, -4.0);
}

#[test]
fn test_shadow_unclips_and_rasterizes() {
    let mut view = sized(100.0, 50.0);
    view.set()
        .corners(ViewShape::RoundedRect(8.0))
        .shadow(6.0, 0.3, Color::BLACK, Offset::new(0.0, 2.0));

    assert!(!view.clips_to_bounds);
    assert_eq!(view.layer.corner_radius, 8.0);
    assert_eq!(view.layer.shadow_radius, 6.0);
    assert_eq!(view.layer.shadow_opacity, 0.3);
    assert_eq!(view.layer.shadow_color, Some(Color::BLACK));
    assert_eq!(view.layer.shadow_path, Some(view.bounds));
    assert!(view.layer.should_rasterize);
}

#[test]
fn test_shapes_apply_through_any_family() {
    let mut button = Button::new("OK");
    button.control.view.set_frame(Rect::new(0.0, 0.0, 120.0, 40.0));
    button
        .set()
        .corners(ViewShape::Circle)
        .border_width(1.0)
        .border_color(Color::SYSTEM_BLUE);

    let layer = &button.control.view.layer;
    assert_eq!(layer.corner_radius, 20.0);
    assert_eq!(layer.border_width, 1.0);
    assert_eq!(layer.border_color, Some(Color::SYSTEM_BLUE));
}
