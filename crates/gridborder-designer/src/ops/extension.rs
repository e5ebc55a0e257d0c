//! Directional extension of a border segment to its nearest parallel
//! neighbour on the same row or column boundary.

use crate::model::{LineKey, LineSet, Orientation};

/// Segments needed to connect `start` to the nearest other segment of the
/// same orientation on its boundary line.
///
/// The result runs in ascending coordinate order from `start` (inclusive)
/// to the target (exclusive), so it can be handed to
/// [`LineSet::add_many`] as is. When both neighbours are equally far the
/// left (or upper) one is used. Returns an empty list when there is no
/// neighbour or `start` is off the grid.
pub fn extension_path(lines: &LineSet, start: LineKey, width: i32, height: i32) -> Vec<LineKey> {
    if !start.in_bounds(width, height) {
        return Vec::new();
    }

    // Coordinate along the boundary, and its exclusive upper limit.
    let (position, extent) = match start.orientation {
        Orientation::Horizontal => (start.x, width),
        Orientation::Vertical => (start.y, height),
    };
    let at = |p: i32| match start.orientation {
        Orientation::Horizontal => LineKey::horizontal(p, start.y),
        Orientation::Vertical => LineKey::vertical(start.x, p),
    };

    let before = (0..position).rev().find(|&p| lines.has(&at(p)));
    let after = (position + 1..extent).find(|&p| lines.has(&at(p)));

    let range = match (before, after) {
        (Some(b), Some(a)) if position - b <= a - position => b + 1..position + 1,
        (_, Some(a)) => position..a,
        (Some(b), None) => b + 1..position + 1,
        (None, None) => return Vec::new(),
    };
    range.map(at).collect()
}
