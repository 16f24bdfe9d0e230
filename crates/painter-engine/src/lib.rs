//! Painter engine.
//!
//! A single-consumer command-execution engine: producers post operations
//! from any thread, one worker thread executes them in order against a
//! render target, and every frame-ready marker hands the finished target to
//! a receiver.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `RelativePoint`, `Point`, `Size`, `PixelRect` |
//! | [`paint`] | `Color` |
//! | [`target`] | `RenderTarget`, `Backend`, `Receiver`, software `Canvas` |
//! | [`ops`] | `Operation`, drawing commands, `FrameStatus` |
//! | [`state`] | `DrawState` accumulator and `StateTweaker` |
//! | [`queue`] | `OperationQueue` |
//! | [`runtime`] | `EventLoop`, `Poster`, `LoopConfig` |
//! | [`logging`] | `env_logger` initialization |
//!
//! ```no_run
//! use painter_engine::ops::{Figure, Fill, Operation};
//! use painter_engine::coords::RelativePoint;
//! use painter_engine::paint::Color;
//! use painter_engine::runtime::{EventLoop, LoopConfig};
//! use painter_engine::state::StateTweaker;
//! use painter_engine::target::{Canvas, CanvasBackend};
//!
//! # fn main() -> anyhow::Result<()> {
//! let event_loop = EventLoop::start(
//!     &mut CanvasBackend,
//!     |frame: &Canvas| println!("frame with {} figure pixels", frame.count(Color::figure())),
//!     LoopConfig::default(),
//! )?;
//! event_loop.post(StateTweaker::Fill(Fill::new(Color::white())).into());
//! event_loop.post(StateTweaker::FigureAdd(Figure::new(RelativePoint::new(0.5, 0.5))).into());
//! event_loop.post(Operation::FrameReady);
//! event_loop.stop_and_wait()?;
//! # Ok(())
//! # }
//! ```

pub mod coords;
pub mod logging;
pub mod ops;
pub mod paint;
pub mod queue;
pub mod runtime;
pub mod state;
pub mod target;
