use todocards::todo::{InputPanel, KeyListenerHub, PanelPhase};

fn open_focused(hub: &KeyListenerHub) -> InputPanel {
    let mut panel = InputPanel::new(hub.clone());
    panel.open();
    panel.focus();
    panel
}

#[test]
fn test_new_panel_is_closed_without_listener() {
    let hub = KeyListenerHub::new();
    let panel = InputPanel::new(hub.clone());

    assert_eq!(panel.phase(), PanelPhase::Closed);
    assert!(!panel.is_open());
    assert!(!panel.is_focused());
    assert!(!panel.enter_multiple());
    assert!(!panel.listener_active());
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn test_listener_follows_focus() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub.clone());

    panel.open();
    assert!(panel.is_open());
    assert!(!panel.listener_active(), "open but unfocused panel must not listen");

    panel.focus();
    assert!(panel.listener_active());
    assert_eq!(hub.active_count(), 1);

    panel.blur();
    assert!(!panel.listener_active());
    assert_eq!(hub.active_count(), 0);

    panel.toggle_focus();
    assert!(panel.is_focused());
    assert_eq!(hub.active_count(), 1);
    assert_eq!(hub.attach_count(), 2);
    assert_eq!(hub.detach_count(), 1);
}

#[test]
fn test_focus_requires_open_panel() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub.clone());

    panel.focus();

    assert!(!panel.is_focused());
    assert_eq!(hub.attach_count(), 0);
}

#[test]
fn test_enter_single_mode_submits_and_exits() {
    let hub = KeyListenerHub::new();
    let mut panel = open_focused(&hub);
    panel.set_text("Buy milk");

    assert_eq!(panel.enter().as_deref(), Some("Buy milk"));

    assert_eq!(panel.phase(), PanelPhase::Exiting);
    assert!(panel.is_open(), "panel stays mounted during the exit animation");
    assert!(!panel.listener_active());
    assert_eq!(hub.active_count(), 0);

    panel.animation_end();
    assert_eq!(panel.phase(), PanelPhase::Closed);
    assert!(!panel.is_focused());
}

#[test]
fn test_enter_multiple_mode_keeps_panel_open() {
    let hub = KeyListenerHub::new();
    let mut panel = open_focused(&hub);
    panel.toggle_multiple();
    assert!(panel.enter_multiple());

    panel.set_text("a");
    assert_eq!(panel.enter().as_deref(), Some("a"));
    panel.set_text("b");
    assert_eq!(panel.enter().as_deref(), Some("b"));

    assert_eq!(panel.phase(), PanelPhase::Open);
    assert!(panel.listener_active());
    assert_eq!(hub.attach_count(), 1);
}

#[test]
fn test_enter_with_empty_text_is_ignored() {
    let hub = KeyListenerHub::new();
    let mut panel = open_focused(&hub);

    assert!(panel.enter().is_none());

    assert_eq!(panel.phase(), PanelPhase::Open);
    assert!(panel.listener_active());
}

#[test]
fn test_enter_without_listener_does_nothing() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub);
    panel.open();
    panel.set_text("unfocused");

    assert!(panel.enter().is_none());
    assert_eq!(panel.phase(), PanelPhase::Open);
}

#[test]
fn test_toggle_multiple_only_while_open() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub);

    panel.toggle_multiple();
    assert!(!panel.enter_multiple());

    panel.open();
    panel.toggle_multiple();
    assert!(panel.enter_multiple());

    panel.dismiss();
    panel.toggle_multiple();
    assert!(panel.enter_multiple(), "exiting panel ignores the toggle");
}

#[test]
fn test_with_enter_multiple_default() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub.clone()).with_enter_multiple(true);
    panel.open();
    panel.focus();
    panel.set_text("x");

    assert_eq!(panel.enter().as_deref(), Some("x"));
    assert_eq!(panel.phase(), PanelPhase::Open);
}

#[test]
fn test_dismiss_and_animation_end_are_phase_guarded() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub);

    panel.dismiss();
    assert_eq!(panel.phase(), PanelPhase::Closed);

    panel.open();
    panel.animation_end();
    assert_eq!(panel.phase(), PanelPhase::Open, "animation end only applies while exiting");

    panel.dismiss();
    assert_eq!(panel.phase(), PanelPhase::Exiting);
    panel.open();
    assert_eq!(panel.phase(), PanelPhase::Exiting, "cannot reopen mid-animation");
}

#[test]
fn test_focus_ignored_while_exiting() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub.clone());
    panel.open();
    panel.dismiss();

    panel.focus();

    assert!(!panel.listener_active());
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn test_drop_detaches_listener() {
    let hub = KeyListenerHub::new();
    let panel = open_focused(&hub);
    assert_eq!(hub.active_count(), 1);

    drop(panel);

    assert_eq!(hub.active_count(), 0);
    assert_eq!(hub.attach_count(), hub.detach_count());
}

#[test]
fn test_repeated_cycles_balance_attach_and_detach() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub.clone());

    for i in 0..5 {
        panel.open();
        panel.focus();
        panel.set_text(format!("item {}", i));
        assert!(panel.enter().is_some());
        panel.animation_end();
        assert_eq!(hub.active_count(), 0);
    }

    assert_eq!(hub.attach_count(), 5);
    assert_eq!(hub.detach_count(), 5);
}

#[test]
fn test_text_editing() {
    let hub = KeyListenerHub::new();
    let mut panel = InputPanel::new(hub);

    panel.push_char('h');
    panel.push_char('i');
    assert_eq!(panel.text(), "hi");
    panel.pop_char();
    assert_eq!(panel.text(), "h");
    panel.clear_text();
    assert_eq!(panel.text(), "");
}

#[test]
fn test_hub_guard_lifecycle() {
    let hub = KeyListenerHub::new();
    let first = hub.attach();
    let second = hub.attach();

    assert_ne!(first.id(), second.id());
    assert!(first.is_attached());
    assert_eq!(hub.active_count(), 2);

    let first_id = first.id();
    drop(first);
    assert!(!hub.is_attached(first_id));
    assert!(second.is_attached());
    assert_eq!(hub.detach_count(), 1);
}
