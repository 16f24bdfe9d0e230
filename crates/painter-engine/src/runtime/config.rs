use crate::coords::Size;

/// Event-loop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    /// Size of both render targets.
    pub size: Size,
    /// Name given to the worker thread (shows up in panics and debuggers).
    pub thread_name: String,
}

impl LoopConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            size: Size::new(400, 400),
            thread_name: "painter-loop".to_string(),
        }
    }
}
