use std::path::PathBuf;

use clap::Parser;
use painter_engine::coords::Size;

/// Runs painter scripts and writes every presented frame as PNG.
///
/// With no SCRIPT and no --listen, the script is read from stdin.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "painter-studio", version, about)]
pub struct StudioConfig {
    /// Render target size
    #[arg(long, value_name = "WxH", value_parser = parse_size, default_value = "400x400")]
    pub size: Size,

    /// Output directory for frames
    #[arg(long = "out", value_name = "DIR", default_value = "frames")]
    pub out_dir: PathBuf,

    /// Serve scripts over HTTP on ADDR (POST body, or GET with ?Cmd=)
    #[arg(long, value_name = "ADDR", conflicts_with = "scripts")]
    pub listen: Option<String>,

    /// env_logger filter, overrides RUST_LOG
    #[arg(long = "log", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Script files, each posted from its own producer
    #[arg(value_name = "SCRIPT")]
    pub scripts: Vec<PathBuf>,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("{s:?} is not WIDTHxHEIGHT"))?;
    let width: u32 = w.parse().map_err(|_| format!("bad width in {s:?}"))?;
    let height: u32 = h.parse().map_err(|_| format!("bad height in {s:?}"))?;
    if width == 0 || height == 0 {
        return Err(format!("{s:?} must be non-zero"));
    }
    Ok(Size::new(width, height))
}
