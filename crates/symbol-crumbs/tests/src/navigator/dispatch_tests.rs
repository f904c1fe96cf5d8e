use serde_json::json;
use tower_lsp::lsp_types::{DocumentSymbolResponse, Position};

use super::*;
use crate::{
    config::CrumbsSettings,
    fixtures::{ascii_settings, geometry_response},
    navigator::command::Column,
};

fn open_event(
    line: u32,
    character: u32,
) -> Event {
    Event::Open {
        symbols: geometry_response(),
        cursor: Position::new(line, character),
    }
}

fn focused(navigator: &Navigator) -> String {
    navigator.session().map(|session| session.focused().name.clone()).unwrap_or_default()
}

#[test]
fn second_open_is_ignored() {
    let mut navigator = Navigator::new(ascii_settings());
    let commands = navigator.handle(open_event(8, 6));
    assert!(matches!(commands.first(), Some(Command::OpenPanel { .. })));
    assert_eq!(focused(&navigator), "new");

    assert!(navigator.handle(open_event(42, 0)).is_empty());
    assert_eq!(focused(&navigator), "new");
}

#[test]
fn open_without_symbols_stays_inactive() {
    let mut navigator = Navigator::new(ascii_settings());
    let commands = navigator.handle(Event::Open {
        symbols: DocumentSymbolResponse::Nested(Vec::new()),
        cursor: Position::new(0, 0),
    });
    assert!(commands.is_empty());
    assert!(!navigator.is_active());
}

#[test]
fn toggle_opens_then_closes() {
    let mut navigator = Navigator::new(ascii_settings());
    let toggle = || Event::Toggle {
        symbols: geometry_response(),
        cursor: Position::new(22, 3),
    };

    navigator.handle(toggle());
    assert_eq!(focused(&navigator), "distance");

    let commands = navigator.handle(toggle());
    assert!(commands.contains(&Command::ClosePanel));
    assert!(!navigator.is_active());
}

#[test]
fn keys_resolve_through_keymap() {
    let mut navigator = Navigator::new(ascii_settings());
    navigator.handle(open_event(8, 6));

    assert!(!navigator.handle(Event::Key { key: "j".to_string() }).is_empty());
    assert_eq!(focused(&navigator), "norm");
    assert!(!navigator.handle(Event::Key { key: "<Left>".to_string() }).is_empty());
    assert_eq!(focused(&navigator), "impl Point");

    assert!(navigator.handle(Event::Key { key: "Z".to_string() }).is_empty());
    assert_eq!(focused(&navigator), "impl Point");
}

#[test]
fn events_without_session_do_nothing() {
    let mut navigator = Navigator::new(ascii_settings());
    for event in [
        Event::Close,
        Event::Leave,
        Event::Resize,
        Event::CursorMoved { row: 2 },
        Event::Key { key: "j".to_string() },
        Event::Action { action: Action::Select },
    ] {
        assert!(navigator.handle(event).is_empty());
    }
    assert!(!navigator.is_active());
}

#[test]
fn leave_and_closing_actions_end_session() {
    let mut navigator = Navigator::new(ascii_settings());
    navigator.handle(open_event(8, 6));
    navigator.handle(Event::Leave);
    assert!(!navigator.is_active());

    navigator.handle(open_event(8, 6));
    navigator.handle(Event::Action { action: Action::YankName });
    assert!(navigator.is_active());
    navigator.handle(Event::Action { action: Action::Delete });
    assert!(!navigator.is_active());

    // A fresh open works once the previous session ended.
    assert!(!navigator.handle(open_event(42, 1)).is_empty());
    assert_eq!(focused(&navigator), "main");
}

#[test]
fn cursor_moved_focuses_row() {
    let mut navigator = Navigator::new(ascii_settings());
    navigator.handle(open_event(2, 5));
    let commands = navigator.handle(Event::CursorMoved { row: 2 });
    assert_eq!(focused(&navigator), "y");
    assert!(commands.contains(&Command::SetCursor {
        column: Column::Mid,
        row: 2
    }));
}

#[test]
fn settings_change_redraws_open_panel() {
    let mut navigator = Navigator::new(ascii_settings());
    assert!(navigator.set_settings(ascii_settings()).is_empty());

    navigator.handle(open_event(8, 6));
    let mut settings = ascii_settings();
    settings.breadcrumb.separator = " / ".to_string();
    let commands = navigator.set_settings(settings);
    assert!(commands.contains(&Command::SetTitle {
        title: "geometry / impl Point / new".to_string()
    }));
    assert_eq!(navigator.settings().breadcrumb.separator, " / ");
}

#[test]
fn events_deserialize_from_json() {
    let event: Event = serde_json::from_value(json!({
        "event": "open",
        "symbols": [{
            "name": "foo",
            "kind": 12,
            "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 5, "character": 0 } },
            "selectionRange": { "start": { "line": 0, "character": 3 }, "end": { "line": 0, "character": 6 } },
            "children": [{
                "name": "bar",
                "kind": 12,
                "range": { "start": { "line": 1, "character": 0 }, "end": { "line": 2, "character": 0 } },
                "selectionRange": { "start": { "line": 1, "character": 3 }, "end": { "line": 1, "character": 6 } }
            }]
        }],
        "cursor": { "line": 1, "character": 0 }
    }))
    .expect("open event");

    let mut navigator = Navigator::new(ascii_settings());
    navigator.handle(event);
    assert_eq!(focused(&navigator), "bar");

    let event: Event = serde_json::from_value(json!({ "event": "key", "key": "k" })).expect("key event");
    assert!(matches!(event, Event::Key { ref key } if key == "k"));
    let event: Event = serde_json::from_value(json!({ "event": "action", "action": "toggle_preview" })).expect("action event");
    assert!(matches!(event, Event::Action { action: Action::TogglePreview }));
    let event: Event = serde_json::from_value(json!({ "event": "cursor_moved", "row": 3 })).expect("cursor event");
    assert!(matches!(event, Event::CursorMoved { row: 3 }));
    assert!(serde_json::from_value::<Event>(json!({ "event": "explode" })).is_err());
}

#[tokio::test]
async fn dispatcher_applies_events_in_order() {
    let (dispatcher, handle) = Dispatcher::spawn(Navigator::new(ascii_settings()));

    let opened = dispatcher.send(open_event(8, 6)).await.expect("loop running");
    assert!(matches!(opened.first(), Some(Command::OpenPanel { .. })));

    let sender = dispatcher.clone();
    let first = tokio::spawn(async move { sender.send(Event::Action { action: Action::Root }).await });
    let first = first.await.expect("task").expect("loop running");
    assert!(first.contains(&Command::SetTitle {
        title: "geometry".to_string()
    }));

    let closed = dispatcher.send(Event::Close).await.expect("loop running");
    assert_eq!(
        closed.last(),
        Some(&Command::MoveSourceCursor {
            position: Position::new(8, 6),
            reorient: crate::config::Reorient::Smart,
        })
    );
    assert!(dispatcher.send(Event::Resize).await.expect("loop running").is_empty());

    handle.abort();
    let _ = handle.await;
    assert_eq!(dispatcher.send(Event::Close).await, Err(DispatchError::Stopped));
    assert_eq!(dispatcher.settings().await, Err(DispatchError::Stopped));
}

#[tokio::test]
async fn dispatcher_forwards_settings() {
    let (dispatcher, _handle) = Dispatcher::spawn(Navigator::default());
    assert_eq!(dispatcher.settings().await, Ok(CrumbsSettings::default()));
    assert!(dispatcher.update_settings(ascii_settings()).await.expect("loop running").is_empty());
    assert_eq!(dispatcher.settings().await, Ok(ascii_settings()));

    let commands = dispatcher.send(open_event(0, 1)).await.expect("loop running");
    assert!(commands.iter().any(|command| matches!(
        command,
        Command::SetLines { column: Column::Mid, lines } if lines.first().is_some_and(|line| line.text == " M geometry >")
    )));
}
