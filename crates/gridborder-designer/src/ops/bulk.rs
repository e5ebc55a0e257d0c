//! Whole row and column selections used by the label tails.

use crate::model::LineKey;

/// Every horizontal segment on row boundary `y`, left to right.
pub fn full_row(y: i32, width: i32) -> Vec<LineKey> {
    (0..width.max(0)).map(|x| LineKey::horizontal(x, y)).collect()
}

/// Every vertical segment on column boundary `x`, top to bottom.
pub fn full_column(x: i32, height: i32) -> Vec<LineKey> {
    (0..height.max(0)).map(|y| LineKey::vertical(x, y)).collect()
}
