//! Controller families configured end to end

use pretty_assertions::assert_eq;
use setkit_widgets::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn screen(title: &str, done: Option<Action>) -> Box<dyn Controller> {
    let mut controller = ViewController::new(title);
    controller.set().navigation_item_properties(|item| {
        item.large_title_display_mode(LargeTitleDisplayMode::Never);
    });
    if let Some(action) = done {
        let mut button = BarButtonItem::system(SystemItem::Done);
        button.set().action(action);
        controller.set().navigation_item_properties(|item| {
            item.right_bar_button_item(button);
        });
    }
    Box::new(controller)
}

#[test]
fn test_navigation_stack_drives_the_bar() {
    let mut navigation = NavigationController::default();
    navigation
        .set()
        .view_controllers_animated(vec![screen("Inbox", None), screen("Message", None)], true);

    let bar = navigation.navigation_bar();
    assert_eq!(bar.items().len(), 2);
    assert_eq!(bar.top_item().and_then(|i| i.title.as_deref()), Some("Message"));
    assert_eq!(bar.back_item().and_then(|i| i.title.as_deref()), Some("Inbox"));

    navigation.pop_view_controller();
    assert_eq!(navigation.navigation_bar().items().len(), 1);
    assert!(navigation.pop_view_controller().is_none());
}

#[test]
fn test_bar_button_actions_fire_from_the_navigation_item() {
    let taps = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&taps);
    let done = Action::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut navigation = NavigationController::with_root(ViewController::default());
    navigation.push_view_controller(screen("Compose", Some(done)));

    let top = navigation.top_view_controller().map(|c| c.view_controller());
    let fired = top
        .and_then(|c| c.navigation_item().right_bar_button_items().first())
        .map(BarButtonItem::perform);
    assert_eq!(fired, Some(true));
    assert_eq!(taps.load(Ordering::SeqCst), 1);
}

#[test]
fn test_toolbar_follows_top_controller() {
    let mut editor = ViewController::new("Editor");
    editor
        .set()
        .toolbar_items(vec![BarButtonItem::new("Bold"), BarButtonItem::new("Italic")], false)
        .editing(true, true);
    assert!(editor.is_editing());

    let mut navigation = NavigationController::with_root(editor);
    navigation.set().toolbar_hidden_animated(false, true);

    assert!(!navigation.is_toolbar_hidden());
    assert_eq!(navigation.toolbar().items.len(), 2);
}

#[test]
fn test_update_requests_accumulate_until_taken() {
    let mut controller = ViewController::default();
    controller
        .set()
        .needs_status_bar_appearance_update()
        .needs_update_of_supported_interface_orientations()
        .needs_status_bar_appearance_update();

    assert_eq!(
        controller.take_pending_updates(),
        PendingUpdates::STATUS_BAR_APPEARANCE | PendingUpdates::SUPPORTED_INTERFACE_ORIENTATIONS
    );
    assert!(controller.pending_updates().is_empty());
}

#[test]
fn test_search_controller_in_navigation_item() {
    let mut search = SearchController::default();
    search.set().search_bar_properties(|bar| {
        bar.placeholder("Find contacts").shows_scope_bar(true);
    });

    let mut contacts = ViewController::new("Contacts");
    contacts.set().navigation_item_properties(|item| {
        item.search_controller(search).hides_search_bar_when_scrolling(false);
    });

    let item = contacts.navigation_item();
    assert!(!item.hides_search_bar_when_scrolling);
    assert_eq!(
        item.search_controller().and_then(|s| s.search_bar().placeholder()),
        Some("Find contacts")
    );
    assert_eq!(
        item.search_controller().map(|s| s.search_bar().shows_scope_bar()),
        Some(true)
    );
}

#[test]
fn test_alert_with_actions_and_fields() {
    let mut alert =
        AlertController::new("Sign in", "Enter your password", AlertControllerStyle::Alert);
    alert
        .set()
        .add_text_field_with(|field| {
            field.secure_text_entry(true);
        })
        .actions(vec![
            AlertAction::new("Cancel", AlertActionStyle::Cancel),
            AlertAction::new("Sign in", AlertActionStyle::Default),
        ])
        .preferred_action(AlertAction::new("Sign in", AlertActionStyle::Default));

    assert_eq!(alert.actions().len(), 2);
    assert_eq!(alert.text_fields().len(), 1);
    assert_eq!(
        alert.preferred_action().and_then(|a| a.title.as_deref()),
        Some("Sign in")
    );
    assert_eq!(alert.view_controller.title.as_deref(), Some("Sign in"));
}

#[test]
fn test_controllers_erase_and_downcast() {
    let controllers: Vec<Box<dyn Controller>> = vec![
        Box::new(NavigationController::default()) as Box<dyn Controller>,
        Box::new(TabBarController::default()),
        Box::new(SearchController::default()),
    ];

    assert!(controllers[0].is::<NavigationController>());
    assert!(controllers[1].downcast_ref::<TabBarController>().is_some());
    assert!(controllers[2].downcast_ref::<NavigationController>().is_none());

    let mut copy = controllers[0].clone();
    copy.set().title("Copy");
    assert_eq!(copy.view_controller().title.as_deref(), Some("Copy"));
    assert_eq!(controllers[0].view_controller().title, None);
}
