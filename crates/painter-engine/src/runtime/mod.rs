//! Event loop: one worker thread draining the operation queue.
//!
//! Lifecycle:
//! - `EventLoop::start` allocates the two render targets and spawns the worker
//! - producers call `post` (or a cloned `Poster`) from any thread
//! - `stop_and_wait` enqueues a stop request behind everything already posted
//!   and blocks until the worker has run all of it and exited

mod config;
mod event_loop;

pub use config::LoopConfig;
pub use event_loop::{EventLoop, LoopStats, Poster};
