/// A coordinate pair as written in the script, each component in `[-1, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One parsed script line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    /// `white`: white background.
    White,
    /// `green`: green background.
    Green,
    /// `update`: present the current picture.
    Update,
    /// `bgrect x1 y1 x2 y2`: black background rectangle.
    BgRect { min: Coord, max: Coord },
    /// `figure x y`: add a figure.
    Figure { center: Coord },
    /// `move x y`: set every figure's center.
    Move { offset: Coord },
    /// `reset`: black background, drop rectangle and figures.
    Reset,
}

impl Command {
    /// The keyword that introduces this command in a script.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::White => "white",
            Command::Green => "green",
            Command::Update => "update",
            Command::BgRect { .. } => "bgrect",
            Command::Figure { .. } => "figure",
            Command::Move { .. } => "move",
            Command::Reset => "reset",
        }
    }
}
