use tower_lsp::lsp_types::{Position, Range};

/// Packs a position into a single integer ordered line-major, character-minor.
///
/// Both components are `u32` in LSP, so shifting the line into the high half
/// keeps every `(line, character)` pair distinct.
pub fn position_key(position: Position) -> u64 {
    (u64::from(position.line) << 32) | u64::from(position.character)
}

/// Whether `position` lies inside `range`, both ends inclusive.
pub fn range_contains(
    range: &Range,
    position: Position,
) -> bool {
    let Range {
        start,
        end,
    } = range;
    if position.line < start.line || position.line > end.line {
        return false;
    }
    if position.line == start.line && position.character < start.character {
        return false;
    }
    if position.line == end.line && position.character > end.character {
        return false;
    }
    true
}

/// Distance from `position` to the nearest end of `range`, in packed-key units.
///
/// Zero when the range contains the position.
pub fn distance_to_range(
    range: &Range,
    position: Position,
) -> u64 {
    if range_contains(range, position) {
        return 0;
    }
    let key = position_key(position);
    let to_start = key.abs_diff(position_key(range.start));
    let to_end = key.abs_diff(position_key(range.end));
    to_start.min(to_end)
}

/// First and last line touched by `range`.
pub fn line_span(range: &Range) -> (u32, u32) {
    (range.start.line, range.end.line.max(range.start.line))
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
