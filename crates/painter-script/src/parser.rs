use crate::command::{Command, Coord};
use crate::error::{ParseError, ParseErrorKind};

// ── Public entry points ───────────────────────────────────────────────────

/// Parses a whole script, one command per line.
///
/// All or nothing: the first bad line aborts the parse and nothing from the
/// script is returned. Blank lines are skipped.
pub fn parse_str(src: &str) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    for (idx, text) in src.lines().enumerate() {
        if let Some(cmd) = parse_numbered(text, idx + 1)? {
            commands.push(cmd);
        }
    }
    Ok(commands)
}

/// Parses a single line. Returns `Ok(None)` for a blank line.
///
/// Errors report line 1.
pub fn parse_line(text: &str) -> Result<Option<Command>, ParseError> {
    parse_numbered(text, 1)
}

// ── Line parsing ──────────────────────────────────────────────────────────

fn parse_numbered(text: &str, line: usize) -> Result<Option<Command>, ParseError> {
    let mut fields = text.split_whitespace();
    let Some(keyword) = fields.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = fields.collect();

    command(keyword, &args)
        .map(Some)
        .map_err(|kind| ParseError::new(kind, line))
}

fn command(keyword: &str, args: &[&str]) -> Result<Command, ParseErrorKind> {
    match keyword {
        "white" => no_args(args, Command::White),
        "green" => no_args(args, Command::Green),
        "update" => no_args(args, Command::Update),
        "reset" => no_args(args, Command::Reset),
        "bgrect" => {
            let [x1, y1, x2, y2] = numbers::<4>(args)?;
            Ok(Command::BgRect { min: Coord::new(x1, y1), max: Coord::new(x2, y2) })
        }
        "figure" => {
            let [x, y] = numbers::<2>(args)?;
            Ok(Command::Figure { center: Coord::new(x, y) })
        }
        "move" => {
            let [x, y] = numbers::<2>(args)?;
            Ok(Command::Move { offset: Coord::new(x, y) })
        }
        _ => Err(ParseErrorKind::UnknownCommand),
    }
}

fn no_args(args: &[&str], cmd: Command) -> Result<Command, ParseErrorKind> {
    if args.is_empty() { Ok(cmd) } else { Err(ParseErrorKind::InvalidArgumentCount) }
}

/// Parses exactly `N` numbers, each in `[-1, 1]`, checked left to right.
fn numbers<const N: usize>(args: &[&str]) -> Result<[f64; N], ParseErrorKind> {
    if args.len() != N {
        return Err(ParseErrorKind::InvalidArgumentCount);
    }
    let mut out = [0.0; N];
    for (pos, (slot, arg)) in out.iter_mut().zip(args).enumerate() {
        let value: f64 = arg.parse().map_err(|_| ParseErrorKind::InvalidArgument { pos })?;
        // NaN fails both comparisons, infinities fail one.
        if !(-1.0..=1.0).contains(&value) {
            return Err(ParseErrorKind::OutOfRange { pos });
        }
        *slot = value;
    }
    Ok(out)
}
