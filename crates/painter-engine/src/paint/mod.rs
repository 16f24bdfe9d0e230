//! Paint model: solid colors only.

mod color;

pub use color::Color;
