//! Setters that target a missing sub-component create it instead of
//! dropping the value

use pretty_assertions::assert_eq;
use setkit_widgets::prelude::*;

#[test]
fn test_button_label_setters_create_the_title_label() {
    let mut button = Button::default();
    assert!(button.title_label().is_none());

    button.set().font(Font::system(20.0, FontWeight::Bold));

    let label = button.title_label().map(|l| (l.text.clone(), l.font.size));
    assert_eq!(label, Some((Some(String::new()), 20.0)));
    assert_eq!(button.current_title(), Some(""));
}

#[test]
fn test_repaired_label_keeps_a_later_title() {
    let mut button = Button::default();
    button.set().multiline().title("Two\nlines");

    let label = button.title_label().map(|l| (l.text.as_deref(), l.number_of_lines));
    assert_eq!(label, Some((Some("Two\nlines"), 0)));
}

#[test]
fn test_controller_view_is_loaded_on_demand() {
    let mut controller = ViewController::new("Settings");
    assert!(!controller.is_view_loaded());

    controller.set().view_properties(|view| {
        view.background_color(Color::WHITE).tag(3);
    });

    assert!(controller.is_view_loaded());
    let view = controller.view().map(|v| (v.view().background_color, v.view().tag));
    assert_eq!(view, Some((Some(Color::WHITE), 3)));
}

#[test]
fn test_existing_controller_view_is_configured_in_place() {
    let mut controller = ViewController::default();
    controller
        .set()
        .view(Label::new("root"))
        .view_properties(|view| {
            view.alpha(0.25);
        });

    let root = controller.view();
    assert_eq!(
        root.and_then(|v| v.downcast_ref::<Label>()).and_then(|l| l.text.as_deref()),
        Some("root")
    );
    assert_eq!(root.map(|v| v.view().alpha), Some(0.25));
}

#[test]
fn test_tab_bar_item_is_created_from_the_title() {
    let mut controller = ViewController::new("Inbox");
    assert!(controller.tab_bar_item.is_none());

    controller.set().tab_bar_item_properties(|item| {
        item.badge_value("3");
    });

    let item = controller.tab_bar_item.as_ref();
    assert_eq!(item.and_then(|i| i.title.as_deref()), Some("Inbox"));
    assert_eq!(item.and_then(|i| i.badge_value.as_deref()), Some("3"));
}

#[test]
fn test_repair_composes_with_containers() {
    let mut home = ViewController::new("Home");
    home.set().tab_bar_item_properties(|item| {
        item.image(Image::named("house"));
    });

    let mut tabs = TabBarController::default();
    tabs.set().view_controllers(vec![
        Box::new(home) as Box<dyn Controller>,
        Box::new(ViewController::new("Profile")),
    ]);

    let titles: Vec<Option<&str>> = tabs
        .tab_bar()
        .items
        .iter()
        .map(|i| i.title.as_deref())
        .collect();
    assert_eq!(titles, vec![Some("Home"), Some("Profile")]);
    assert!(tabs.tab_bar().items[0].image.is_some());
    assert!(tabs.tab_bar().items[1].image.is_none());
}
