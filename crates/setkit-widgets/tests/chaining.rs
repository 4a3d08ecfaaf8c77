//! Chaining behavior across widget families
//!
//! Every setter mutates the one target it wraps, applies in call order and
//! hands the same wrapper back, whichever family in the ancestor chain
//! contributed it.

use pretty_assertions::assert_eq;
use setkit_widgets::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_chain_mixes_generated_and_inherited_setters() {
    let mut label = Label::default();
    label
        .set()
        .text("Hello")
        .text_color(Color::SYSTEM_RED)
        .text_alignment(TextAlignment::Center)
        .background_color(Color::WHITE)
        .alpha(0.5)
        .tag(7)
        .font_size(24.0);

    assert_eq!(label.text.as_deref(), Some("Hello"));
    assert_eq!(label.text_color, Color::SYSTEM_RED);
    assert_eq!(label.font.size, 24.0);
    assert_eq!(label.view.background_color, Some(Color::WHITE));
    assert_eq!(label.view.alpha, 0.5);
    assert_eq!(label.view.tag, 7);
}

#[test]
fn test_later_setters_win() {
    let mut view = View::default();
    view.set().alpha(0.2).hidden(true).alpha(0.9).hidden(false);

    assert_eq!(view.alpha, 0.9);
    assert!(!view.hidden);
}

#[test]
fn test_chain_returns_the_wrapped_target() {
    let mut button = Button::default();
    let expected: *const Button = &button;

    let setter = button.set().title("Go").enabled(false).corners(ViewShape::RoundedRect(4.0));
    assert!(std::ptr::eq(setter.base(), expected));
    assert!(std::ptr::eq(setter.into_inner(), expected));
}

#[test]
fn test_free_function_starts_a_chain() {
    let mut field = TextField::default();
    set(&mut field)
        .placeholder("Email")
        .keyboard_type(KeyboardType::EmailAddress)
        .autocapitalization_type(AutocapitalizationType::None);

    assert_eq!(field.placeholder.as_deref(), Some("Email"));
    assert_eq!(field.keyboard_type, KeyboardType::EmailAddress);
}

#[test]
fn test_deep_chain_reaches_every_ancestor() {
    let mut table = TableView::default();
    table
        .set()
        .row_height(56.0)
        .separator_style(SeparatorStyle::None)
        .bounces(false)
        .scroll_disabled()
        .content_inset(EdgeInsets::all(8.0))
        .background_color(Color::SYSTEM_GRAY)
        .hidden(false);

    assert_eq!(table.row_height, 56.0);
    assert_eq!(table.separator_style, SeparatorStyle::None);
    assert!(!table.scroll_view.bounces);
    assert!(!table.scroll_view.is_scroll_enabled());
    assert_eq!(table.scroll_view.content_inset, EdgeInsets::all(8.0));
    assert_eq!(table.scroll_view.view.background_color, Some(Color::SYSTEM_GRAY));
}

#[test]
fn test_type_erased_widgets_take_view_setters() {
    let mut widgets: Vec<Box<dyn Widget>> = vec![
        Box::new(Label::new("a")) as Box<dyn Widget>,
        Box::new(Switch::default()),
        Box::new(ImageView::default()),
    ];

    for widget in widgets.iter_mut() {
        widget.set().hidden(true).tint_color(Color::SYSTEM_GREEN);
    }

    assert!(widgets.iter().all(|w| w.view().hidden));
    assert!(widgets
        .iter()
        .all(|w| w.view().tint_color == Some(Color::SYSTEM_GREEN)));
    assert_eq!(
        widgets[0].downcast_ref::<Label>().and_then(|l| l.text.as_deref()),
        Some("a")
    );
}

#[test]
fn test_controls_dispatch_registered_actions() {
    let taps = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&taps);

    let mut toggle = Switch::default();
    toggle
        .set()
        .on(true)
        .target(ControlEvents::VALUE_CHANGED, Action::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

    assert_eq!(toggle.control.send_actions(ControlEvents::VALUE_CHANGED), 1);
    assert_eq!(toggle.control.send_actions(ControlEvents::TOUCH_UP_INSIDE), 0);
    assert_eq!(taps.load(Ordering::SeqCst), 1);
}

#[test]
fn test_stack_view_arranges_and_spaces() {
    let first = Label::new("first");
    let first_id = first.view.id();

    let mut stack = StackView::default();
    stack
        .set()
        .axis(Axis::Vertical)
        .spacing(8.0)
        .alignment(StackAlignment::Center)
        .arranged_subview(first)
        .arranged_subview(Button::new("second"))
        .custom_spacing(20.0, first_id);

    assert_eq!(stack.arranged_subviews().len(), 2);
    assert_eq!(stack.spacing_after(first_id), 20.0);
    assert_eq!(stack.spacing_after(stack.arranged_subviews()[1]), 8.0);
    assert!(stack
        .view
        .subviews()
        .iter()
        .all(|s| !s.view().translates_autoresizing_mask_into_constraints));
}
