//! Coordinate and geometry types shared by operations and render targets.
//!
//! Two spaces exist:
//! - relative: `RelativePoint`, normalized by the script grammar to `[-1, 1]`
//! - absolute: `Point` / `PixelRect`, integer pixels, origin top-left, +Y down
//!
//! Mapping from relative to absolute is a plain scale by the target size.
//! There is no re-centering, so negative values land off-target and are
//! clipped by the backend's fill.

mod point;
mod rect;
mod size;

pub use point::{Point, RelativePoint};
pub use rect::PixelRect;
pub use size::Size;
