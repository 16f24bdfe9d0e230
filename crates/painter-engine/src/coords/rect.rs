use super::{Point, Size};

/// Half-open axis-aligned pixel rectangle: `[min.x, max.x) × [min.y, max.y)`.
///
/// A rectangle whose `min` exceeds `max` on either axis is empty. It is
/// never normalized, so an inverted background rectangle paints nothing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub min: Point,
    pub max: Point,
}

impl PixelRect {
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle from corner coordinates `(x0, y0)`–`(x1, y1)`.
    #[inline]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Full bounds of a target with the given size.
    #[inline]
    pub fn from_size(size: Size) -> Self {
        Self::from_coords(0, 0, clamp_dim(size.width), clamp_dim(size.height))
    }

    #[inline]
    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    #[inline]
    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y
    }

    /// Overlapping region, or `None` when the rectangles do not overlap or
    /// either one is empty.
    #[inline]
    pub fn intersect(self, other: PixelRect) -> Option<PixelRect> {
        let r = PixelRect::from_coords(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}

#[inline]
fn clamp_dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
