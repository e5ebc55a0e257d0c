//! Flood fill over cells bounded by drawn border segments.
//!
//! Two neighbouring cells are connected unless the segment between them is
//! drawn. A region is closed when none of its cells reaches the outer edge
//! of the grid through an undrawn edge segment. Filling a closed region
//! yields the border segments separating it from everything else.

use std::collections::{BTreeSet, HashSet, VecDeque};

use gridborder_core::GridError;

use crate::model::{Cell, LineKey, LineSet};

/// Result of a successful fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRegion {
    /// Number of cells in the region.
    pub cells: usize,
    /// Border segments enclosing the region.
    pub borders: BTreeSet<LineKey>,
}

/// Computes the closed region containing `start`.
///
/// # Errors
/// - [`GridError::OutOfBounds`] when `start` is not on the grid.
/// - [`GridError::ContourOpen`] as soon as a reached cell lies on the grid
///   edge without a sealing segment on that side.
pub fn flood_fill(
    lines: &LineSet,
    width: i32,
    height: i32,
    start: Cell,
) -> Result<FillRegion, GridError> {
    if !start.in_bounds(width, height) {
        return Err(GridError::OutOfBounds {
            x: start.x,
            y: start.y,
        });
    }

    let mut visited: HashSet<Cell> = HashSet::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if touches_open_edge(lines, width, height, cell) {
            return Err(GridError::ContourOpen {
                x: cell.x,
                y: cell.y,
            });
        }

        for (border, neighbour) in neighbours(cell) {
            if lines.has(&border) || !neighbour.in_bounds(width, height) {
                continue;
            }
            if visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    let mut borders = BTreeSet::new();
    for cell in &visited {
        for (border, neighbour) in neighbours(*cell) {
            if !visited.contains(&neighbour) {
                borders.insert(border);
            }
        }
    }

    Ok(FillRegion {
        cells: visited.len(),
        borders,
    })
}

fn touches_open_edge(lines: &LineSet, width: i32, height: i32, cell: Cell) -> bool {
    (cell.x == 0 && !lines.has(&cell.left()))
        || (cell.x == width - 1 && !lines.has(&cell.right()))
        || (cell.y == 0 && !lines.has(&cell.top()))
        || (cell.y == height - 1 && !lines.has(&cell.bottom()))
}

/// The four sides of a cell paired with the cell on the other side.
fn neighbours(cell: Cell) -> [(LineKey, Cell); 4] {
    [
        (cell.top(), Cell::new(cell.x, cell.y - 1)),
        (cell.bottom(), Cell::new(cell.x, cell.y + 1)),
        (cell.left(), Cell::new(cell.x - 1, cell.y)),
        (cell.right(), Cell::new(cell.x + 1, cell.y)),
    ]
}
