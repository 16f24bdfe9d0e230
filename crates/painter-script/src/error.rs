use std::fmt;

/// What went wrong on a script line.
///
/// Argument positions are 0-based and count arguments only, not the command
/// name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnknownCommand,
    InvalidArgumentCount,
    InvalidArgument { pos: usize },
    OutOfRange { pos: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnknownCommand => f.write_str("unknown command"),
            ParseErrorKind::InvalidArgumentCount => f.write_str("Invalid argument count"),
            ParseErrorKind::InvalidArgument { pos } => write!(f, "invalid argument at pos {pos}"),
            ParseErrorKind::OutOfRange { pos } => {
                write!(f, "value at pos {pos} is not in [-1,1] range")
            }
        }
    }
}

/// A script parse error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based script line number.
    pub line: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script error at line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError {}
