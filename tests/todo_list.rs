use chrono::{TimeZone, Utc};
use todocards::todo::{KeyListenerHub, ManualClock, PanelPhase, SequentialIds, TodoField, TodoList};
use uuid::Uuid;

fn list(hub: &KeyListenerHub) -> TodoList {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
    TodoList::with_sources(hub.clone(), clock, SequentialIds::new())
}

#[test]
fn test_single_entry_scenario() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);

    todos.open_input();
    todos.panel_mut().focus();
    todos.panel_mut().set_text("Buy milk");
    let id = todos.press_enter().expect("item added");

    assert_eq!(todos.items().len(), 1);
    assert_eq!(todos.items()[0].title, "Buy milk");
    assert_eq!(todos.incomplete_items()[0].id, id);
    assert_eq!(todos.panel().text(), "", "pending text cleared after add");
    assert_eq!(todos.panel().phase(), PanelPhase::Exiting);
    assert_eq!(hub.active_count(), 0);

    todos.input_animation_end();
    assert_eq!(todos.panel().phase(), PanelPhase::Closed);
}

#[test]
fn test_multiple_entry_scenario() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);

    todos.open_input();
    todos.panel_mut().focus();
    todos.panel_mut().toggle_multiple();
    for title in ["one", "two", "three"] {
        todos.panel_mut().set_text(title);
        assert!(todos.press_enter().is_some());
    }

    let titles: Vec<_> = todos.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
    assert_eq!(todos.panel().phase(), PanelPhase::Open);
    assert!(todos.panel().listener_active());

    todos.dismiss_input();
    todos.input_animation_end();
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn test_press_enter_with_empty_text_adds_nothing() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);
    todos.open_input();
    todos.panel_mut().focus();

    assert!(todos.press_enter().is_none());
    assert!(todos.items().is_empty());
    assert_eq!(todos.panel().phase(), PanelPhase::Open);
}

#[test]
fn test_selection_binds_edit_target() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);
    let a = todos.add("a").unwrap();

    assert!(todos.selected_item().is_none());
    todos.select(a);
    assert_eq!(todos.selected_id(), Some(a));
    assert_eq!(todos.selected_item().map(|i| i.title.as_str()), Some("a"));

    todos.close_selection();
    assert!(todos.selected_id().is_none());
}

#[test]
fn test_update_field_closes_selection() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);
    let a = todos.add("a").unwrap();
    todos.select(a);

    todos.update_field(a, TodoField::Title("renamed".to_string()));

    assert!(todos.selected_id().is_none());
    assert_eq!(todos.items()[0].title, "renamed");
}

#[test]
fn test_selection_of_removed_item_resolves_to_none() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);
    let a = todos.add("a").unwrap();
    todos.select(a);

    todos.remove(a);

    assert_eq!(todos.selected_id(), Some(a));
    assert!(todos.selected_item().is_none());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);
    todos.add("a");
    let missing = Uuid::from_u128(42);

    todos.toggle_complete(missing);
    todos.remove(missing);

    assert_eq!(todos.items().len(), 1);
    assert!(!todos.items()[0].is_completed);
}

#[test]
fn test_toggle_moves_between_views() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);
    let a = todos.add("a").unwrap();

    todos.toggle_complete(a);
    assert!(todos.incomplete_items().is_empty());
    assert_eq!(todos.completed_items().len(), 1);

    todos.toggle_complete(a);
    assert_eq!(todos.incomplete_items().len(), 1);
    assert!(todos.completed_items().is_empty());
}

#[test]
fn test_dropping_list_releases_listener() {
    let hub = KeyListenerHub::new();
    let mut todos = list(&hub);
    todos.open_input();
    todos.panel_mut().focus();
    assert_eq!(hub.active_count(), 1);

    drop(todos);

    assert_eq!(hub.active_count(), 0);
}
