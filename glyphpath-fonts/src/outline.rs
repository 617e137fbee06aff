//! Glyph outline traversal.
//!
//! Defines [`OutlineSink`], the visitor that receives a glyph's outline
//! program one command at a time. It is our own trait (not
//! `ttf_parser::OutlineBuilder`) so that consumers do not need to depend on
//! `ttf-parser` directly. Coordinates are in font design units, Y-up.

/// Receiver for glyph outline commands.
///
/// Each traversal replays the program from the start; implementations own
/// whatever they accumulate.
pub trait OutlineSink {
    /// Start a new contour at the given point.
    fn move_to(&mut self, x: f64, y: f64);
    /// Draw a straight line to the given point.
    fn line_to(&mut self, x: f64, y: f64);
    /// Draw a quadratic Bezier curve (TrueType-style).
    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64);
    /// Draw a cubic Bezier curve (CFF/OpenType-style).
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);
    /// Close the current contour.
    fn close(&mut self);
}

/// Outcome of a successful outline traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineStatus {
    /// At least one command was delivered to the sink.
    Drawn,
    /// The glyph exists but has no drawable geometry (e.g. space).
    Empty,
}

impl OutlineStatus {
    /// Whether the sink received nothing.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}
