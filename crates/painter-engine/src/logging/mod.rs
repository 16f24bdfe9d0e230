//! Logging setup.
//!
//! The engine logs through the `log` facade only; binaries pick the backend.
//! `init_logging` wires up `env_logger` for the studio and for ad-hoc tools.

mod init;

pub use init::{LoggingConfig, init_logging};
