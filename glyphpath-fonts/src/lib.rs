//! Font access for `glyphpath`.
//!
//! This crate wraps `ttf-parser` to open OpenType/TrueType fonts (and
//! faces of `.ttc` collections), resolve characters through the font's best
//! codepoint table, and replay glyph outline programs. It is intentionally
//! independent of `glyphpath-graphics`: all values are plain `f64`/`u16`.
//! Bridging to geometry types happens in `glyphpath-core`.

pub mod cmap;
pub mod error;
mod glyf;
pub mod metrics;
pub mod outline;
pub mod source;

#[cfg(any(test, feature = "synthetic"))]
pub mod synthetic;

pub use error::FontError;
pub use metrics::GlyphRect;
pub use outline::{OutlineSink, OutlineStatus};
pub use source::{FontSource, face_count};
