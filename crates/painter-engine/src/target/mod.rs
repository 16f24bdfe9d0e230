//! Render-target contract and the in-memory software backend.
//!
//! The event loop only needs three things from a rendering backend:
//! - allocate a target of a given size (`Backend`)
//! - fill an axis-aligned rectangle of a target with a solid color
//! - query a target's size / bounds
//!
//! and one thing from the presentation layer: accept a finished target
//! (`Receiver`). Clipping fills to the target bounds is the backend's job.

mod canvas;
mod contract;

pub use canvas::{Canvas, CanvasBackend};
pub use contract::{Backend, Receiver, RenderTarget};
