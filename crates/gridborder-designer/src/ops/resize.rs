//! Grid resizing: translate then clip.

use gridborder_core::GridError;

/// Per-side size changes. Positive values grow that side, negative values
/// shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideDeltas {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl SideDeltas {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// New dimensions and the translation to apply to existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub width: i32,
    pub height: i32,
    pub shift_x: i32,
    pub shift_y: i32,
}

/// Plans a resize that adds or removes rows and columns on each side.
///
/// Content moves right by `left` and down by `top`.
pub fn plan_sides(width: i32, height: i32, deltas: SideDeltas) -> Result<ResizePlan, GridError> {
    let new_width = i64::from(width) + i64::from(deltas.left) + i64::from(deltas.right);
    let new_height = i64::from(height) + i64::from(deltas.top) + i64::from(deltas.bottom);
    let (width, height) = checked_dimensions(new_width, new_height)?;
    Ok(ResizePlan {
        width,
        height,
        shift_x: deltas.left,
        shift_y: deltas.top,
    })
}

/// Plans a centered resize to `new_width` x `new_height`.
///
/// The shift per axis is `floor((new - old) / 2)`, so odd growth puts the
/// extra row or column at the bottom or right.
pub fn plan_centered(
    width: i32,
    height: i32,
    new_width: i32,
    new_height: i32,
) -> Result<ResizePlan, GridError> {
    let (new_width, new_height) = checked_dimensions(i64::from(new_width), i64::from(new_height))?;
    Ok(ResizePlan {
        width: new_width,
        height: new_height,
        shift_x: (new_width - width).div_euclid(2),
        shift_y: (new_height - height).div_euclid(2),
    })
}

fn checked_dimensions(width: i64, height: i64) -> Result<(i32, i32), GridError> {
    let invalid = || GridError::InvalidDimensions { width, height };
    if width < 1 || height < 1 {
        return Err(invalid());
    }
    let w = i32::try_from(width).map_err(|_| invalid())?;
    let h = i32::try_from(height).map_err(|_| invalid())?;
    Ok((w, h))
}
