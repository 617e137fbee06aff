//! Core geometric types shared across `glyphpath`.
//!
//! Geometry is expressed with `kurbo`: a glyph's outline program is a
//! [`BezPath`] whose elements are the path commands of a single traversal.

pub use kurbo::{Affine, BezPath, PathEl, Point};

/// Coordinate scalar. Font design units and canvas units are both `f64`.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

/// One drawing instruction: move, line, quadratic, cubic or close.
pub type PathCommand = PathEl;

/// The ordered commands produced by one glyph traversal.
pub type OutlineProgram = BezPath;

/// Points carried by a command, in operand order.
///
/// Control points come before the end point; `ClosePath` has none.
pub fn command_points(cmd: PathCommand) -> impl Iterator<Item = Point> {
    let (points, arity) = match cmd {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => ([p, Point::ZERO, Point::ZERO], 1),
        PathEl::QuadTo(p1, p2) => ([p1, p2, Point::ZERO], 2),
        PathEl::CurveTo(p1, p2, p3) => ([p1, p2, p3], 3),
        PathEl::ClosePath => ([Point::ZERO; 3], 0),
    };
    points.into_iter().take(arity)
}
