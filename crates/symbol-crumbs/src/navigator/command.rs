use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::{Position, Range};

use crate::{
    config::{Border, Reorient},
    render::PanelLine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Left,
    Mid,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    Vertical,
    Horizontal,
}

/// A presentation instruction for the editor.
///
/// Lines, rows and positions use the LSP's 0-based coordinates except
/// `SetCursor::row`, which is the 1-based panel row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    OpenPanel {
        title: String,
        border: Border,
        size_percent: u16,
        scrolloff: u32,
    },
    ClosePanel,
    SetTitle {
        title: String,
    },
    SetLines {
        column: Column,
        lines: Vec<PanelLine>,
    },
    SetCursor {
        column: Column,
        row: usize,
    },
    HighlightSource {
        range: Range,
    },
    ClearSourceHighlight,
    MoveSourceCursor {
        position: Position,
        reorient: Reorient,
    },
    ShowPreview {
        range: Range,
    },
    HidePreview,
    Jump {
        position: Position,
        split: Option<Split>,
    },
    SelectRange {
        range: Range,
    },
    YankText {
        text: String,
    },
    YankRange {
        range: Range,
    },
    StartInsert {
        position: Position,
    },
    Rename {
        position: Position,
    },
    DeleteRange {
        range: Range,
    },
    CreateFold {
        start_line: u32,
        end_line: u32,
    },
    DeleteFold {
        start_line: u32,
        end_line: u32,
    },
    ToggleComment {
        start_line: u32,
        end_line: u32,
    },
}

impl Command {
    pub fn closes_panel(&self) -> bool {
        matches!(self, Command::ClosePanel)
    }
}
