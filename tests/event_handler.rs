use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;
use todocards::ui::core::{EventHandler, EventType};

fn mouse_moved() -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ticks_arrive_under_continuous_input() {
    let flood = futures::stream::repeat_with(|| Ok::<Event, std::io::Error>(mouse_moved()));
    let mut handler = EventHandler::with_source(flood, Duration::from_millis(5));

    let result = tokio::time::timeout(Duration::from_secs(2), async {
        let mut ticks = 0;
        while ticks < 3 {
            match handler.next_event().await.unwrap() {
                EventType::Tick => ticks += 1,
                EventType::Mouse(_) => {}
                other => panic!("unexpected event: {:?}", other),
            }
            tokio::task::yield_now().await;
        }
        ticks
    })
    .await;

    assert_eq!(result.expect("ticks were starved by input"), 3);
}

#[tokio::test]
async fn test_idle_source_still_ticks() {
    let idle = futures::stream::pending::<std::io::Result<Event>>();
    let mut handler = EventHandler::with_source(idle, Duration::from_millis(5));

    for _ in 0..2 {
        let event = tokio::time::timeout(Duration::from_secs(1), handler.next_event())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(event, EventType::Tick));
    }
}

#[tokio::test]
async fn test_closed_source_is_an_error() {
    let closed = futures::stream::empty::<std::io::Result<Event>>();
    let mut handler = EventHandler::with_source(closed, Duration::from_secs(60));

    // The first tick fires immediately and may win the race once
    let mut saw_error = false;
    for _ in 0..2 {
        if handler.next_event().await.is_err() {
            saw_error = true;
            break;
        }
    }
    assert!(saw_error);
}

#[test]
fn test_key_release_is_ignored() {
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert!(matches!(EventType::from(Event::Key(release)), EventType::Other));

    let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert!(matches!(EventType::from(Event::Key(press)), EventType::Key(_)));
}

#[test]
fn test_resize_passes_through() {
    assert!(matches!(EventType::from(Event::Resize(80, 24)), EventType::Resize(80, 24)));
}
