//! Maps parsed script commands onto engine operations.
//!
//! Every drawing command becomes a `StateTweaker` wrapped in
//! `Operation::Tweak`; the draw state itself never leaves the worker thread.

use painter_engine::coords::RelativePoint;
use painter_engine::ops::{BackgroundRect, Figure, Fill, Operation};
use painter_engine::paint::Color;
use painter_engine::state::StateTweaker;
use painter_script::{Command, Coord, ParseError};

pub fn operation(cmd: Command) -> Operation {
    let keyword = cmd.keyword();
    let op = match cmd {
        Command::White => StateTweaker::Fill(Fill::new(Color::white())).into(),
        Command::Green => StateTweaker::Fill(Fill::new(Color::green())).into(),
        Command::Update => Operation::FrameReady,
        Command::BgRect { min, max } => {
            StateTweaker::BackgroundRect(BackgroundRect::new(point(min), point(max))).into()
        }
        Command::Figure { center } => StateTweaker::FigureAdd(Figure::new(point(center))).into(),
        Command::Move { offset } => StateTweaker::Move(point(offset)).into(),
        Command::Reset => StateTweaker::Reset.into(),
    };
    log::trace!("{keyword} -> {}", op.name());
    op
}

/// Parses `src` and maps every command. Nothing is returned if any line fails.
pub fn operations(src: &str) -> Result<Vec<Operation>, ParseError> {
    Ok(painter_script::parse_str(src)?.into_iter().map(operation).collect())
}

#[inline]
fn point(c: Coord) -> RelativePoint {
    RelativePoint::new(c.x, c.y)
}
