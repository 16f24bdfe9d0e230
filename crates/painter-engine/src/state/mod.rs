//! Draw-state accumulator.
//!
//! `DrawState` is the cumulative picture: a background fill, an optional
//! background rectangle and an ordered list of figures. It is owned by the
//! worker thread and only changes through `StateTweaker` values that arrive
//! in the queue, so it needs no locking of its own.

use crate::coords::RelativePoint;
use crate::ops::{BackgroundRect, Draw, Figure, Fill, FrameStatus};
use crate::paint::Color;
use crate::target::RenderTarget;

/// A single mutation of the draw state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StateTweaker {
    /// Replace the background fill.
    Fill(Fill),
    /// Replace the background rectangle.
    BackgroundRect(BackgroundRect),
    /// Append a figure.
    FigureAdd(Figure),
    /// Set the center of every existing figure to the given point.
    ///
    /// This overwrites centers; it does not offset them.
    Move(RelativePoint),
    /// Black background, no rectangle, no figures.
    Reset,
}

/// Cumulative draw state, repainted in full on every `execute`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawState {
    background: Option<Fill>,
    background_rect: Option<BackgroundRect>,
    figures: Vec<Figure>,
}

impl DrawState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit background fill, `None` until one is set.
    #[inline]
    pub fn background(&self) -> Option<&Fill> {
        self.background.as_ref()
    }

    #[inline]
    pub fn background_rect(&self) -> Option<&BackgroundRect> {
        self.background_rect.as_ref()
    }

    /// Figures in insertion order.
    #[inline]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn apply(&mut self, tweaker: StateTweaker) {
        match tweaker {
            StateTweaker::Fill(fill) => self.background = Some(fill),
            StateTweaker::BackgroundRect(rect) => self.background_rect = Some(rect),
            StateTweaker::FigureAdd(figure) => self.figures.push(figure),
            StateTweaker::Move(center) => {
                for figure in &mut self.figures {
                    figure.center = center;
                }
            }
            StateTweaker::Reset => {
                self.background = Some(Fill::new(Color::black()));
                self.background_rect = None;
                self.figures.clear();
            }
        }
    }

    /// Repaints the whole target: background (white if never set), then the
    /// rectangle, then figures in order.
    ///
    /// Never completes a frame on its own.
    pub fn execute(&self, target: &mut dyn RenderTarget) -> FrameStatus {
        match &self.background {
            Some(fill) => fill.draw(target),
            None => Fill::new(Color::white()).draw(target),
        }
        if let Some(rect) = &self.background_rect {
            rect.draw(target);
        }
        for figure in &self.figures {
            figure.draw(target);
        }
        FrameStatus::Pending
    }
}
