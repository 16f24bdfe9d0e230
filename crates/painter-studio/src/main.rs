mod builder;
mod config;
mod sink;
mod transport;

use anyhow::Result;
use clap::Parser;
use painter_engine::logging::{LoggingConfig, init_logging};
use painter_engine::runtime::{EventLoop, LoopConfig};
use painter_engine::target::CanvasBackend;

use crate::config::StudioConfig;
use crate::sink::PngSink;

fn main() -> Result<()> {
    let config = StudioConfig::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &config.log_filter {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    let sink = PngSink::create(&config.out_dir)?;
    log::info!("writing frames to {}", sink.dir().display());

    let loop_config = LoopConfig::default().with_size(config.size.width, config.size.height);
    let event_loop = EventLoop::start(&mut CanvasBackend, sink, loop_config)?;
    let poster = event_loop.poster();

    // ── Producers ─────────────────────────────────────────────────────────
    let outcome = match &config.listen {
        Some(addr) => transport::serve(addr, poster),
        None if config.scripts.is_empty() => transport::run_stdin(&poster),
        None => transport::run_files(&config.scripts, &poster),
    };

    // Drain whatever was posted even if a producer failed.
    let stats = event_loop.stop_and_wait()?;
    log::info!("{} operations executed, {} frames presented", stats.executed, stats.frames);

    outcome
}
