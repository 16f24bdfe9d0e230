use core::ops::{Add, Sub};

use super::Size;

/// Absolute pixel coordinate (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Point expressed as a fraction of the target size.
///
/// Components are expected in `[-1, 1]`. The range is enforced by the script
/// grammar before a value reaches the engine and is not checked again here.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RelativePoint {
    pub x: f64,
    pub y: f64,
}

impl RelativePoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maps to absolute pixels by scaling each component with the target size.
    ///
    /// The result is truncated toward zero. `(-0.5, 0.5)` on a 400×400 target
    /// maps to `(-200, 200)`: off-target, left for the fill to clip.
    #[inline]
    pub fn to_abs(self, size: Size) -> Point {
        Point::new(
            (self.x * f64::from(size.width)) as i32,
            (self.y * f64::from(size.height)) as i32,
        )
    }
}
