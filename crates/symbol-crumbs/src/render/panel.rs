use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::Range;

use crate::{
    config::{CrumbsSettings, PreviewMode},
    outline::{NodeId, Outline, SymbolNode},
};

use super::icons::{icon_for, kind_name};

/// One row of a panel column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLine {
    pub text: String,
    pub icon: String,
    /// Kind display name, for highlight groups.
    pub kind: String,
    pub has_children: bool,
}

/// Everything the editor needs to draw the three columns for one focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    pub left: Vec<PanelLine>,
    pub mid: Vec<PanelLine>,
    pub right: Vec<PanelLine>,
    /// 1-based row of the focused node in `mid`.
    pub cursor_row: usize,
    /// 1-based row of the parent in `left`, if any.
    pub left_cursor_row: Option<usize>,
    /// Source range to preview in place of the right column.
    pub preview: Option<Range>,
}

/// Whether the right column should preview source for `node`.
///
/// `toggled` flips the mode's default.
pub fn wants_preview(
    node: &SymbolNode,
    mode: PreviewMode,
    toggled: bool,
) -> bool {
    let base = match mode {
        PreviewMode::Leaf => !node.has_children(),
        PreviewMode::Always => true,
        PreviewMode::Never => false,
    };
    base != toggled
}

pub fn render(
    outline: &Outline,
    focus: NodeId,
    preview_toggled: bool,
    settings: &CrumbsSettings,
) -> PanelView {
    let node = outline.node(focus);

    let mid = lines_for(outline, outline.siblings(focus), settings);
    let (left, left_cursor_row) = match node.parent {
        Some(parent) => (lines_for(outline, outline.siblings(parent), settings), Some(outline.node(parent).index)),
        None => (Vec::new(), None),
    };

    let preview = wants_preview(node, settings.sections.preview, preview_toggled).then_some(node.range);
    let right = if preview.is_some() {
        Vec::new()
    } else {
        lines_for(outline, &node.children, settings)
    };

    PanelView {
        title: breadcrumb(outline, focus, &settings.breadcrumb.separator),
        left,
        mid,
        right,
        cursor_row: node.index,
        left_cursor_row,
        preview,
    }
}

/// `"outer > inner > focused"` for the chain ending at `focus`.
pub fn breadcrumb(
    outline: &Outline,
    focus: NodeId,
    separator: &str,
) -> String {
    outline.path(focus).iter().map(|&id| outline.node(id).name.as_str()).collect::<Vec<_>>().join(separator)
}

fn lines_for(
    outline: &Outline,
    ids: &[NodeId],
    settings: &CrumbsSettings,
) -> Vec<PanelLine> {
    ids.iter()
        .map(|&id| {
            let node = outline.node(id);
            let icon = icon_for(node.kind, &settings.icons);
            let marker = settings.node_markers.marker_for(node.has_children());
            PanelLine {
                text: format!(" {icon}{}{marker}", node.name),
                icon: icon.to_string(),
                kind: kind_name(node.kind).to_string(),
                has_children: node.has_children(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src/render/panel_tests.rs"]
mod tests;
