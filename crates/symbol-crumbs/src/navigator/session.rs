use tower_lsp::lsp_types::Position;
use tracing::debug;

use crate::{
    config::CrumbsSettings,
    navigator::{
        action::Action,
        command::{Column, Command, Split},
    },
    outline::{NodeId, Outline, SymbolNode, locate},
    render,
    text_pos::line_span,
};

/// State of one open navigator panel.
///
/// Owns the outline snapshot taken at open time; dropped when the panel
/// closes.
#[derive(Debug, Clone)]
pub struct Session {
    outline: Outline,
    focus: NodeId,
    /// Source cursor when the panel opened, restored on close.
    origin: Position,
    preview_toggled: bool,
}

impl Session {
    /// Focus the node at `cursor`. `None` when there is nothing to navigate.
    pub fn open(
        outline: Outline,
        cursor: Position,
    ) -> Option<Self> {
        let focus = locate(&outline, cursor)?;
        Some(Self {
            outline,
            focus,
            origin: cursor,
            preview_toggled: false,
        })
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn focus(&self) -> NodeId {
        self.focus
    }

    pub fn focused(&self) -> &SymbolNode {
        self.outline.node(self.focus)
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn preview_toggled(&self) -> bool {
        self.preview_toggled
    }

    pub fn open_commands(
        &self,
        settings: &CrumbsSettings,
    ) -> Vec<Command> {
        let mut commands = vec![Command::OpenPanel {
            title: render::breadcrumb(&self.outline, self.focus, &settings.breadcrumb.separator),
            border: settings.window.border,
            size_percent: settings.window.size_percent,
            scrolloff: settings.window.scrolloff,
        }];
        commands.extend(self.render(settings));
        commands
    }

    /// Full redraw for the current focus.
    pub fn render(
        &self,
        settings: &CrumbsSettings,
    ) -> Vec<Command> {
        let view = render::render(&self.outline, self.focus, self.preview_toggled, settings);
        let node = self.focused();

        let mut commands = vec![
            Command::SetTitle {
                title: view.title,
            },
            Command::SetLines {
                column: Column::Left,
                lines: view.left,
            },
        ];
        if let Some(row) = view.left_cursor_row {
            commands.push(Command::SetCursor {
                column: Column::Left,
                row,
            });
        }
        commands.push(Command::SetLines {
            column: Column::Mid,
            lines: view.mid,
        });
        commands.push(Command::SetCursor {
            column: Column::Mid,
            row: view.cursor_row,
        });
        commands.push(Command::SetLines {
            column: Column::Right,
            lines: view.right,
        });
        commands.push(match view.preview {
            Some(range) => Command::ShowPreview {
                range,
            },
            None => Command::HidePreview,
        });

        if settings.source_buffer.highlight {
            commands.push(Command::HighlightSource {
                range: node.range,
            });
        }
        if settings.source_buffer.follow_node {
            commands.push(Command::MoveSourceCursor {
                position: node.selection_range.start,
                reorient: settings.source_buffer.reorient,
            });
        }
        commands
    }

    /// Focus the sibling at 1-based `row`, clamped to the current level.
    pub fn focus_row(
        &mut self,
        row: usize,
        settings: &CrumbsSettings,
    ) -> Vec<Command> {
        let siblings = self.outline.siblings(self.focus);
        let row = row.clamp(1, siblings.len());
        let target = siblings[row - 1];
        self.move_focus(Some(target), settings)
    }

    /// Apply one action and return the resulting commands.
    pub fn apply(
        &mut self,
        action: Action,
        settings: &CrumbsSettings,
    ) -> Vec<Command> {
        let node = self.focused();
        let (start_line, end_line) = line_span(&node.range);

        match action {
            Action::NextSibling => {
                let target = self.outline.siblings(self.focus).get(node.index).copied();
                self.move_focus(target, settings)
            },
            Action::PreviousSibling => {
                let target = node.index.checked_sub(2).map(|i| self.outline.siblings(self.focus)[i]);
                self.move_focus(target, settings)
            },
            Action::Parent => {
                let target = node.parent;
                self.move_focus(target, settings)
            },
            Action::Children => {
                let target = node.children.first().copied();
                self.move_focus(target, settings)
            },
            Action::Root => {
                let target = self.outline.root_of(self.focus);
                self.move_focus(Some(target), settings)
            },
            Action::Select => closing(Command::Jump {
                position: node.selection_range.start,
                split: None,
            }),
            Action::Vsplit => closing(Command::Jump {
                position: node.selection_range.start,
                split: Some(Split::Vertical),
            }),
            Action::Hsplit => closing(Command::Jump {
                position: node.selection_range.start,
                split: Some(Split::Horizontal),
            }),
            Action::Close => closing(Command::MoveSourceCursor {
                position: self.origin,
                reorient: settings.source_buffer.reorient,
            }),
            Action::VisualName => closing(Command::SelectRange {
                range: node.selection_range,
            }),
            Action::VisualScope => closing(Command::SelectRange {
                range: node.range,
            }),
            Action::YankName => vec![Command::YankText {
                text: node.name.clone(),
            }],
            Action::YankScope => vec![Command::YankRange {
                range: node.range,
            }],
            Action::InsertName => closing(Command::StartInsert {
                position: node.selection_range.start,
            }),
            Action::AppendName => closing(Command::StartInsert {
                position: node.selection_range.end,
            }),
            Action::Rename => closing(Command::Rename {
                position: node.selection_range.start,
            }),
            Action::Delete => closing(Command::DeleteRange {
                range: node.range,
            }),
            Action::FoldCreate => vec![Command::CreateFold {
                start_line,
                end_line,
            }],
            Action::FoldDelete => vec![Command::DeleteFold {
                start_line,
                end_line,
            }],
            Action::Comment => vec![Command::ToggleComment {
                start_line,
                end_line,
            }],
            Action::TogglePreview => {
                self.preview_toggled = !self.preview_toggled;
                self.render(settings)
            },
        }
    }

    fn move_focus(
        &mut self,
        target: Option<NodeId>,
        settings: &CrumbsSettings,
    ) -> Vec<Command> {
        match target {
            Some(target) if target != self.focus => {
                debug!(
                    "[session] focus {} -> {}",
                    self.outline.node(self.focus).name,
                    self.outline.node(target).name
                );
                self.focus = target;
                self.render(settings)
            },
            _ => Vec::new(),
        }
    }
}

/// Commands for an action that ends the session, followed by `effect`.
fn closing(effect: Command) -> Vec<Command> {
    vec![Command::ClearSourceHighlight, Command::ClosePanel, effect]
}

#[cfg(test)]
#[path = "../../tests/src/navigator/session_tests.rs"]
mod tests;
