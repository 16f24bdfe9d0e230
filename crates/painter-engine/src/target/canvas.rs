use std::path::Path;

use anyhow::{Context, Result, ensure};

use crate::coords::{PixelRect, Point, Size};
use crate::paint::Color;

use super::{Backend, RenderTarget};

/// CPU-side RGBA8 render target, row-major, top-left origin.
///
/// A new canvas is fully transparent black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Color::transparent(); size.area()],
        }
    }

    /// Color at `p`, or `None` outside the canvas.
    #[inline]
    pub fn pixel(&self, p: Point) -> Option<Color> {
        if !self.bounds().contains(p) {
            return None;
        }
        self.pixels.get(self.index(p.x, p.y)).copied()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Number of pixels currently set to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// True when every pixel equals `color`.
    pub fn is_filled_with(&self, color: Color) -> bool {
        self.pixels.iter().all(|&c| c == color)
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.size.width, self.size.height, |x, y| {
            let idx = y as usize * self.size.width as usize + x as usize;
            image::Rgba(self.pixels[idx].to_array())
        })
    }

    /// Encodes the canvas as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write PNG to {}", path.display()))
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }
}

impl RenderTarget for Canvas {
    #[inline]
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, rect: PixelRect, color: Color) {
        let Some(r) = rect.intersect(self.bounds()) else {
            return;
        };
        for y in r.min.y..r.max.y {
            let start = self.index(r.min.x, y);
            let end = self.index(r.max.x, y);
            self.pixels[start..end].fill(color);
        }
    }
}

/// Backend that allocates [`Canvas`] targets.
#[derive(Debug, Default, Copy, Clone)]
pub struct CanvasBackend;

impl Backend for CanvasBackend {
    type Target = Canvas;

    fn new_target(&mut self, size: Size) -> Result<Canvas> {
        ensure!(
            !size.is_empty(),
            "cannot allocate a {}x{} canvas",
            size.width,
            size.height
        );
        log::debug!("allocating {}x{} canvas", size.width, size.height);
        Ok(Canvas::new(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(Size::new(8, 4))
    }

    #[test]
    fn new_canvas_is_transparent() {
        assert!(canvas().is_filled_with(Color::transparent()));
    }

    #[test]
    fn fill_bounds_covers_everything() {
        let mut c = canvas();
        let bounds = c.bounds();
        c.fill(bounds, Color::white());
        assert!(c.is_filled_with(Color::white()));
    }

    #[test]
    fn fill_is_clipped_to_bounds() {
        let mut c = canvas();
        c.fill(PixelRect::from_coords(-10, -10, 2, 100), Color::green());
        assert_eq!(c.count(Color::green()), 2 * 4);
        assert_eq!(c.pixel(Point::new(1, 3)), Some(Color::green()));
        assert_eq!(c.pixel(Point::new(2, 0)), Some(Color::transparent()));
    }

    #[test]
    fn fill_off_target_is_noop() {
        let mut c = canvas();
        c.fill(PixelRect::from_coords(100, 100, 200, 200), Color::black());
        c.fill(PixelRect::from_coords(6, 3, 2, 1), Color::black());
        assert!(c.is_filled_with(Color::transparent()));
    }

    #[test]
    fn fill_replaces_previous_color() {
        let mut c = canvas();
        let bounds = c.bounds();
        c.fill(bounds, Color::white());
        c.fill(PixelRect::from_coords(0, 0, 1, 1), Color::rgba(1, 2, 3, 4));
        assert_eq!(c.pixel(Point::zero()), Some(Color::rgba(1, 2, 3, 4)));
        assert_eq!(c.count(Color::white()), 8 * 4 - 1);
    }

    #[test]
    fn pixel_outside_is_none() {
        let c = canvas();
        assert_eq!(c.pixel(Point::new(8, 0)), None);
        assert_eq!(c.pixel(Point::new(0, -1)), None);
    }

    #[test]
    fn to_image_matches_pixels() {
        let mut c = canvas();
        c.fill(PixelRect::from_coords(7, 3, 8, 4), Color::figure());
        let img = c.to_image();
        assert_eq!(img.dimensions(), (8, 4));
        assert_eq!(img.get_pixel(7, 3).0, Color::figure().to_array());
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn backend_rejects_empty_size() {
        assert!(CanvasBackend.new_target(Size::new(0, 10)).is_err());
        assert!(CanvasBackend.new_target(Size::new(10, 10)).is_ok());
    }
}
