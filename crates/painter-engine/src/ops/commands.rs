use crate::coords::{PixelRect, Point, RelativePoint};
use crate::paint::Color;
use crate::target::RenderTarget;

/// Paints itself onto a render target.
///
/// Implemented by the three stateless drawing commands. They are executed
/// directly as operations, or replayed by `DrawState` on every repaint.
pub trait Draw {
    fn draw(&self, target: &mut dyn RenderTarget);
}

/// Fills the whole target with one color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Draw for Fill {
    fn draw(&self, target: &mut dyn RenderTarget) {
        let bounds = target.bounds();
        target.fill(bounds, self.color);
    }
}

/// Opaque black rectangle between two relative corners.
///
/// Corners are mapped as given; an inverted rectangle is empty and draws
/// nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BackgroundRect {
    pub min: RelativePoint,
    pub max: RelativePoint,
}

impl BackgroundRect {
    #[inline]
    pub const fn new(min: RelativePoint, max: RelativePoint) -> Self {
        Self { min, max }
    }
}

impl Draw for BackgroundRect {
    fn draw(&self, target: &mut dyn RenderTarget) {
        let size = target.size();
        let rect = PixelRect::new(self.min.to_abs(size), self.max.to_abs(size));
        target.fill(rect, Color::black());
    }
}

/// "T"-shaped glyph centered on a relative point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Figure {
    pub center: RelativePoint,
}

impl Figure {
    /// Half-length of both bars, in pixels.
    pub const HALF_LENGTH: i32 = 50;
    /// Height of the horizontal bar, and twice the half-width of the vertical one.
    pub const HALF_WIDTH: i32 = 40;

    #[inline]
    pub const fn new(center: RelativePoint) -> Self {
        Self { center }
    }

    /// The two bars of the glyph for an absolute center: horizontal bar above
    /// the center line, vertical bar hanging below it.
    pub fn bars(center: Point) -> [PixelRect; 2] {
        let (hlen, hwidth) = (Self::HALF_LENGTH, Self::HALF_WIDTH);
        [
            PixelRect::new(center - Point::new(hlen, hwidth), center + Point::new(hlen, 0)),
            PixelRect::new(
                center - Point::new(hwidth / 2, 0),
                center + Point::new(hwidth / 2, hlen),
            ),
        ]
    }
}

impl Draw for Figure {
    fn draw(&self, target: &mut dyn RenderTarget) {
        let center = self.center.to_abs(target.size());
        for bar in Self::bars(center) {
            target.fill(bar, Color::figure());
        }
    }
}
