//! Operations: the units of work carried by the queue and run by the worker.
//!
//! The set is closed. Every operation either paints, mutates the worker-owned
//! `DrawState` and repaints, or marks the current frame as ready to present.
//!
//! Extending:
//! - add a drawing command in `commands` implementing `Draw`
//! - add a variant to `Operation` and a match arm in `Operation::execute`
//! - if it should persist across repaints, add a `StateTweaker` variant too

mod commands;

use std::fmt;

use crate::state::{DrawState, StateTweaker};
use crate::target::RenderTarget;

pub use commands::{BackgroundRect, Draw, Figure, Fill};

/// Outcome of executing one operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    /// More operations are expected before the target is worth presenting.
    Pending,
    /// The target holds a finished frame; hand it to the receiver.
    Complete,
}

impl FrameStatus {
    #[inline]
    pub fn is_complete(self) -> bool {
        self == FrameStatus::Complete
    }
}

/// One-shot closure run against the building target.
pub struct OperationFn(Box<dyn FnOnce(&mut dyn RenderTarget) + Send>);

impl OperationFn {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut dyn RenderTarget) + Send + 'static,
    {
        Self(Box::new(f))
    }

    #[inline]
    fn call(self, target: &mut dyn RenderTarget) {
        (self.0)(target)
    }
}

impl fmt::Debug for OperationFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OperationFn(..)")
    }
}

/// Unit of work executed by the event loop.
#[derive(Debug)]
pub enum Operation {
    /// Fill the whole target, bypassing the draw state.
    Fill(Fill),
    /// Paint a black rectangle, bypassing the draw state.
    BackgroundRect(BackgroundRect),
    /// Paint a figure glyph, bypassing the draw state.
    Figure(Figure),
    /// Present the target as it is now. Paints nothing.
    FrameReady,
    /// Mutate the draw state, then repaint it from scratch.
    Tweak(StateTweaker),
    /// Run arbitrary code against the target.
    Func(OperationFn),
}

impl Operation {
    /// Wraps a closure as an operation.
    pub fn func<F>(f: F) -> Self
    where
        F: FnOnce(&mut dyn RenderTarget) + Send + 'static,
    {
        Operation::Func(OperationFn::new(f))
    }

    /// Short variant name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Fill(_) => "fill",
            Operation::BackgroundRect(_) => "bgrect",
            Operation::Figure(_) => "figure",
            Operation::FrameReady => "frame-ready",
            Operation::Tweak(_) => "tweak",
            Operation::Func(_) => "func",
        }
    }

    /// Runs the operation against `target`.
    ///
    /// `state` is the accumulator owned by the calling worker. Only `Tweak`
    /// touches it.
    pub fn execute(self, target: &mut dyn RenderTarget, state: &mut DrawState) -> FrameStatus {
        match self {
            Operation::Fill(cmd) => cmd.draw(target),
            Operation::BackgroundRect(cmd) => cmd.draw(target),
            Operation::Figure(cmd) => cmd.draw(target),
            Operation::FrameReady => return FrameStatus::Complete,
            Operation::Tweak(tweaker) => {
                state.apply(tweaker);
                return state.execute(target);
            }
            Operation::Func(f) => f.call(target),
        }
        FrameStatus::Pending
    }
}

impl From<StateTweaker> for Operation {
    #[inline]
    fn from(tweaker: StateTweaker) -> Self {
        Operation::Tweak(tweaker)
    }
}
