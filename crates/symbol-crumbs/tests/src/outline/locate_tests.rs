use tower_lsp::lsp_types::{DocumentSymbol, Position, Range, SymbolKind};

use super::*;
use crate::outline::Outline;

fn symbol(
    name: &str,
    start: (u32, u32),
    end: (u32, u32),
    children: Vec<DocumentSymbol>,
) -> DocumentSymbol {
    let range = Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1));
    DocumentSymbol {
        name: name.to_string(),
        detail: None,
        kind: SymbolKind::FUNCTION,
        tags: None,
        #[allow(deprecated)]
        deprecated: None,
        range,
        selection_range: range,
        children: if children.is_empty() { None } else { Some(children) },
    }
}

fn located_name(
    outline: &Outline,
    line: u32,
    character: u32,
) -> Option<String> {
    locate(outline, Position::new(line, character)).map(|id| outline.node(id).name.clone())
}

#[test]
fn empty_outline_locates_nothing() {
    assert_eq!(locate(&Outline::default(), Position::new(0, 0)), None);
}

#[test]
fn returns_deepest_containing_node() {
    let outline = Outline::build(&[symbol("foo", (0, 0), (5, 0), vec![symbol("bar", (1, 0), (2, 0), vec![])])]);
    assert_eq!(located_name(&outline, 1, 0).as_deref(), Some("bar"));
    assert_eq!(located_name(&outline, 4, 0).as_deref(), Some("foo"));
}

#[test]
fn overlapping_siblings_yield_deepest_match() {
    let outline = Outline::build(&[
        symbol("a", (0, 0), (10, 0), vec![]),
        symbol("b", (5, 0), (20, 0), vec![symbol("c", (6, 0), (7, 0), vec![])]),
    ]);
    assert_eq!(located_name(&outline, 6, 0).as_deref(), Some("c"));
    // Equal depth keeps the earlier sibling.
    assert_eq!(located_name(&outline, 8, 0).as_deref(), Some("a"));
    assert_eq!(located_name(&outline, 15, 0).as_deref(), Some("b"));
}

#[test]
fn leaf_strictly_inside_wins() {
    let outline = Outline::build(&[symbol(
        "impl",
        (0, 0),
        (40, 0),
        vec![symbol("first", (2, 4), (10, 5), vec![]), symbol("second", (12, 4), (20, 5), vec![])],
    )]);
    assert_eq!(located_name(&outline, 15, 8).as_deref(), Some("second"));
    assert_eq!(located_name(&outline, 11, 0).as_deref(), Some("impl"));
}

#[test]
fn falls_back_to_nearest_range() {
    let outline = Outline::build(&[symbol("first", (10, 0), (12, 0), vec![]), symbol("second", (20, 0), (21, 0), vec![])]);
    assert_eq!(located_name(&outline, 15, 0).as_deref(), Some("first"));
    assert_eq!(located_name(&outline, 18, 0).as_deref(), Some("second"));
    assert_eq!(located_name(&outline, 99, 0).as_deref(), Some("second"));
    assert_eq!(located_name(&outline, 0, 0).as_deref(), Some("first"));
}

#[test]
fn fallback_ties_go_to_earliest_in_preorder() {
    // Both ranges are exactly 4 lines away from line 14.
    let outline = Outline::build(&[symbol("above", (0, 0), (10, 0), vec![]), symbol("below", (18, 0), (30, 0), vec![])]);
    assert_eq!(located_name(&outline, 14, 0).as_deref(), Some("above"));
}

#[test]
fn fallback_prefers_parent_over_equally_distant_child() {
    let outline = Outline::build(&[symbol("parent", (5, 0), (10, 0), vec![symbol("child", (6, 0), (10, 0), vec![])])]);
    assert_eq!(located_name(&outline, 12, 0).as_deref(), Some("parent"));
}

#[test]
fn start_column_excludes_earlier_characters() {
    let outline =
        Outline::build(&[symbol("outer", (0, 0), (0, 80), vec![symbol("inner", (0, 10), (0, 20), vec![])])]);
    assert_eq!(located_name(&outline, 0, 9).as_deref(), Some("outer"));
    assert_eq!(located_name(&outline, 0, 10).as_deref(), Some("inner"));
    assert_eq!(located_name(&outline, 0, 21).as_deref(), Some("outer"));
}
