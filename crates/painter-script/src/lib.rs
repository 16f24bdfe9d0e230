//! Line-oriented command grammar for the painter engine.
//!
//! Each non-blank line holds one command and its arguments, separated by
//! whitespace:
//!
//! | Line | Meaning |
//! |------|---------|
//! | `white` / `green` | background fill |
//! | `bgrect x1 y1 x2 y2` | black background rectangle |
//! | `figure x y` | add a figure |
//! | `move x y` | set every figure's center |
//! | `reset` | black background, no rectangle, no figures |
//! | `update` | present the current picture |
//!
//! Coordinates are relative to the target size and must lie in `[-1, 1]`.
//!
//! This crate has no dependencies and knows nothing about the engine; the
//! studio maps `Command` values onto engine operations.
//!
//! ```rust
//! use painter_script::{Command, Coord, parse_str};
//!
//! let cmds = parse_str("white\nfigure 0.5 0.5\nupdate").unwrap();
//! assert_eq!(cmds[1], Command::Figure { center: Coord::new(0.5, 0.5) });
//! ```

pub mod command;
pub mod error;
pub mod parser;

pub use command::{Command, Coord};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse_line, parse_str};
