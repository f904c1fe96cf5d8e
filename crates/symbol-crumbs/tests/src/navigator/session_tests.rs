use serde_json::json;
use tower_lsp::lsp_types::{Position, Range};

use super::*;
use crate::{
    config::{CrumbsSettings, Reorient},
    fixtures::{ascii_settings, geometry_outline},
    navigator::command::{Column, Command, Split},
    outline::Outline,
};

fn open_at(
    line: u32,
    character: u32,
) -> Session {
    Session::open(geometry_outline(), Position::new(line, character)).expect("fixture is not empty")
}

fn focused_name(session: &Session) -> &str {
    &session.focused().name
}

#[test]
fn open_focuses_symbol_under_cursor() {
    let session = open_at(8, 6);
    assert_eq!(focused_name(&session), "new");
    assert_eq!(session.origin(), Position::new(8, 6));
    assert!(!session.preview_toggled());
}

#[test]
fn open_between_symbols_uses_nearest() {
    // Line 41 sits between `geometry` (ends 40:0) and `main` (starts 42:0).
    let session = Session::open(geometry_outline(), Position::new(41, 0)).expect("fixture is not empty");
    assert_eq!(focused_name(&session), "geometry");
}

#[test]
fn open_on_empty_outline_is_none() {
    assert!(Session::open(Outline::default(), Position::new(0, 0)).is_none());
}

#[test]
fn open_commands_start_with_panel() {
    let settings = ascii_settings();
    let session = open_at(8, 6);
    let commands = session.open_commands(&settings);
    assert_eq!(
        commands[0],
        Command::OpenPanel {
            title: "geometry > impl Point > new".to_string(),
            border: settings.window.border,
            size_percent: settings.window.size_percent,
            scrolloff: settings.window.scrolloff,
        }
    );
    assert!(commands.contains(&Command::SetCursor {
        column: Column::Mid,
        row: 1
    }));
    assert!(commands.contains(&Command::SetCursor {
        column: Column::Left,
        row: 2
    }));
}

#[test]
fn sibling_moves_clamp_at_the_ends() {
    let settings = ascii_settings();
    let mut session = open_at(8, 6);

    assert!(session.apply(Action::PreviousSibling, &settings).is_empty());
    assert_eq!(focused_name(&session), "new");

    assert!(!session.apply(Action::NextSibling, &settings).is_empty());
    assert_eq!(focused_name(&session), "norm");

    assert!(session.apply(Action::NextSibling, &settings).is_empty());
    assert_eq!(focused_name(&session), "norm");

    session.apply(Action::PreviousSibling, &settings);
    assert_eq!(focused_name(&session), "new");
}

#[test]
fn parent_children_and_root_walk_the_tree() {
    let settings = ascii_settings();
    let mut session = open_at(2, 5);
    assert_eq!(focused_name(&session), "x");

    session.apply(Action::Parent, &settings);
    assert_eq!(focused_name(&session), "Point");
    session.apply(Action::Parent, &settings);
    assert_eq!(focused_name(&session), "geometry");
    assert!(session.apply(Action::Parent, &settings).is_empty());

    session.apply(Action::Children, &settings);
    assert_eq!(focused_name(&session), "Point");
    session.apply(Action::Children, &settings);
    assert_eq!(focused_name(&session), "x");
    assert!(session.apply(Action::Children, &settings).is_empty());

    session.apply(Action::Root, &settings);
    assert_eq!(focused_name(&session), "geometry");
    assert!(session.apply(Action::Root, &settings).is_empty());
}

#[test]
fn select_closes_and_jumps_to_name() {
    let mut session = open_at(8, 6);
    let commands = session.apply(Action::Select, &ascii_settings());
    assert_eq!(
        commands,
        vec![
            Command::ClearSourceHighlight,
            Command::ClosePanel,
            Command::Jump {
                position: Position::new(7, 4),
                split: None,
            },
        ]
    );
}

#[test]
fn splits_carry_direction() {
    let mut session = open_at(8, 6);
    let commands = session.apply(Action::Vsplit, &ascii_settings());
    assert!(commands.contains(&Command::Jump {
        position: Position::new(7, 4),
        split: Some(Split::Vertical),
    }));
    let commands = session.apply(Action::Hsplit, &ascii_settings());
    assert!(commands.contains(&Command::Jump {
        position: Position::new(7, 4),
        split: Some(Split::Horizontal),
    }));
}

#[test]
fn close_restores_original_cursor() {
    let settings = ascii_settings();
    let mut session = open_at(8, 6);
    session.apply(Action::Root, &settings);
    let commands = session.apply(Action::Close, &settings);
    assert_eq!(
        commands.last(),
        Some(&Command::MoveSourceCursor {
            position: Position::new(8, 6),
            reorient: Reorient::Smart,
        })
    );
    assert!(commands.iter().any(Command::closes_panel));
}

#[test]
fn editing_actions_target_name_or_scope() {
    let settings = ascii_settings();
    let mut session = open_at(12, 0);
    assert_eq!(focused_name(&session), "norm");
    let scope = Range::new(Position::new(11, 4), Position::new(14, 5));
    let name = Range::new(Position::new(11, 4), Position::new(11, 8));

    assert_eq!(
        session.apply(Action::VisualName, &settings).last(),
        Some(&Command::SelectRange {
            range: name
        })
    );
    assert_eq!(
        session.apply(Action::VisualScope, &settings).last(),
        Some(&Command::SelectRange {
            range: scope
        })
    );
    assert_eq!(
        session.apply(Action::InsertName, &settings).last(),
        Some(&Command::StartInsert {
            position: name.start
        })
    );
    assert_eq!(
        session.apply(Action::AppendName, &settings).last(),
        Some(&Command::StartInsert {
            position: name.end
        })
    );
    assert_eq!(
        session.apply(Action::Rename, &settings).last(),
        Some(&Command::Rename {
            position: name.start
        })
    );
    assert_eq!(
        session.apply(Action::Delete, &settings).last(),
        Some(&Command::DeleteRange {
            range: scope
        })
    );
}

#[test]
fn yank_fold_and_comment_keep_panel_open() {
    let settings = ascii_settings();
    let mut session = open_at(12, 0);

    assert_eq!(
        session.apply(Action::YankName, &settings),
        vec![Command::YankText {
            text: "norm".to_string()
        }]
    );
    assert_eq!(
        session.apply(Action::YankScope, &settings),
        vec![Command::YankRange {
            range: Range::new(Position::new(11, 4), Position::new(14, 5))
        }]
    );
    assert_eq!(
        session.apply(Action::FoldCreate, &settings),
        vec![Command::CreateFold {
            start_line: 11,
            end_line: 14
        }]
    );
    assert_eq!(
        session.apply(Action::FoldDelete, &settings),
        vec![Command::DeleteFold {
            start_line: 11,
            end_line: 14
        }]
    );
    assert_eq!(
        session.apply(Action::Comment, &settings),
        vec![Command::ToggleComment {
            start_line: 11,
            end_line: 14
        }]
    );
}

#[test]
fn toggle_preview_flips_right_column() {
    let settings = ascii_settings();
    let mut session = open_at(0, 3);
    assert_eq!(focused_name(&session), "geometry");
    assert!(session.render(&settings).contains(&Command::HidePreview));

    let commands = session.apply(Action::TogglePreview, &settings);
    assert!(session.preview_toggled());
    assert!(commands.contains(&Command::ShowPreview {
        range: Range::new(Position::new(0, 0), Position::new(40, 0))
    }));
    assert!(commands.contains(&Command::SetLines {
        column: Column::Right,
        lines: Vec::new()
    }));
}

#[test]
fn render_follows_source_buffer_settings() {
    let session = open_at(8, 6);
    let commands = session.render(&ascii_settings());
    assert!(commands.contains(&Command::HighlightSource {
        range: Range::new(Position::new(7, 4), Position::new(9, 5))
    }));
    assert!(commands.contains(&Command::MoveSourceCursor {
        position: Position::new(7, 4),
        reorient: Reorient::Smart
    }));

    let quiet = CrumbsSettings::from_lsp_payload(Some(&json!({
        "sourceBuffer": { "followNode": false, "highlight": false }
    })));
    let commands = session.render(&quiet);
    assert!(!commands.iter().any(|c| matches!(c, Command::HighlightSource { .. })));
    assert!(!commands.iter().any(|c| matches!(c, Command::MoveSourceCursor { .. })));
}

#[test]
fn focus_row_clamps_to_level() {
    let settings = ascii_settings();
    let mut session = open_at(8, 6);
    session.apply(Action::Parent, &settings);
    assert_eq!(focused_name(&session), "impl Point");

    session.focus_row(99, &settings);
    assert_eq!(focused_name(&session), "distance");
    session.focus_row(0, &settings);
    assert_eq!(focused_name(&session), "Point");
    assert!(session.focus_row(1, &settings).is_empty());
}
