//! Pure grid algorithms over a [`LineSet`](crate::model::LineSet).
//!
//! None of these mutate anything; the [`Document`](crate::document::Document)
//! applies their results so a failure never leaves partial edits behind.

mod bulk;
mod extension;
mod flood_fill;
mod resize;

pub use bulk::{full_column, full_row};
pub use extension::extension_path;
pub use flood_fill::{flood_fill, FillRegion};
pub use resize::{plan_centered, plan_sides, ResizePlan, SideDeltas};
