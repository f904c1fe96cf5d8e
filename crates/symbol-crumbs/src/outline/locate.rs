use tower_lsp::lsp_types::Position;

use crate::text_pos::{distance_to_range, range_contains};

use super::types::{NodeId, Outline};

/// Find the node at `position`.
///
/// Prefers the deepest node whose range contains the position. When no
/// range contains it, falls back to the node with the nearest start or end;
/// ties go to the earliest node in pre-order. `None` only for an empty outline.
pub fn locate(
    outline: &Outline,
    position: Position,
) -> Option<NodeId> {
    deepest_containing(outline, outline.roots(), position).or_else(|| nearest(outline, position))
}

fn deepest_containing(
    outline: &Outline,
    level: &[NodeId],
    position: Position,
) -> Option<NodeId> {
    let mut best: Option<NodeId> = None;
    for &id in level {
        let node = outline.node(id);
        if !range_contains(&node.range, position) {
            continue;
        }
        // Siblings may overlap, so every containing one is searched.
        let candidate = deepest_containing(outline, &node.children, position).unwrap_or(id);
        if best.is_none_or(|best| outline.node(candidate).depth > outline.node(best).depth) {
            best = Some(candidate);
        }
    }
    best
}

fn nearest(
    outline: &Outline,
    position: Position,
) -> Option<NodeId> {
    let mut best: Option<(u64, NodeId)> = None;
    for id in outline.preorder() {
        let distance = distance_to_range(&outline.node(id).range, position);
        // Strict comparison keeps the first node on ties.
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, id));
        }
    }
    best.map(|(_, id)| id)
}

#[cfg(test)]
#[path = "../../tests/src/outline/locate_tests.rs"]
mod tests;
