use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use painter_engine::target::{Canvas, Receiver};

/// Receiver that writes every presented frame to `<dir>/frame-NNNNN.png`.
///
/// Runs on the loop's worker thread. A frame that fails to encode is logged
/// and skipped; the loop keeps going.
#[derive(Debug)]
pub struct PngSink {
    dir: PathBuf,
    next_index: u64,
}

impl PngSink {
    /// Creates `dir` (and parents) if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        Ok(Self { dir, next_index: 0 })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn frame_path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("frame-{index:05}.png"))
    }
}

impl Receiver<Canvas> for PngSink {
    fn update(&mut self, canvas: &Canvas) {
        let path = self.frame_path(self.next_index);
        self.next_index += 1;

        match canvas.save_png(&path) {
            Ok(()) => log::info!("wrote {}", path.display()),
            Err(err) => log::error!("dropping frame: {err:#}"),
        }
    }
}
