#![forbid(unsafe_code)]

//! Core: geometric primitives and logging shared by the Trellis crates.

pub mod geometry;
pub mod logging;

pub use geometry::{Margin, Position, Rect, Size};

#[cfg(feature = "tracing")]
pub use logging::{debug_span, error, trace, warn};
