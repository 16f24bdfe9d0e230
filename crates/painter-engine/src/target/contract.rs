use anyhow::Result;

use crate::coords::{PixelRect, Size};
use crate::paint::Color;

/// Pixel buffer an operation paints into.
///
/// Object-safe: operations receive `&mut dyn RenderTarget` so the closed
/// operation set does not have to be generic over the backend.
pub trait RenderTarget {
    /// Target size in pixels.
    fn size(&self) -> Size;

    /// Replaces every pixel of `rect ∩ bounds()` with `color`.
    ///
    /// Rectangles that are empty, inverted, or entirely off-target are a
    /// no-op. Implementations must never panic on out-of-bounds input.
    fn fill(&mut self, rect: PixelRect, color: Color);

    /// Full target area, origin at `(0, 0)`.
    #[inline]
    fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.size())
    }
}

/// Allocates render targets.
///
/// Called twice, on the thread that starts the loop, before the worker is
/// spawned. Targets then move to the worker and are never reallocated.
pub trait Backend {
    type Target: RenderTarget;

    fn new_target(&mut self, size: Size) -> Result<Self::Target>;
}

/// Presentation callback.
///
/// Invoked on the worker thread, once per executed frame-ready marker, never
/// concurrently with itself. The target is only borrowed for the duration of
/// the call; keep a copy if the frame must outlive it.
pub trait Receiver<T> {
    fn update(&mut self, target: &T);
}

impl<T, F> Receiver<T> for F
where
    F: FnMut(&T),
{
    #[inline]
    fn update(&mut self, target: &T) {
        self(target)
    }
}
