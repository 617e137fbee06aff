//! Affine transforms for glyph outlines.
//!
//! A glyph is normalized by a single affine map built from its bounding box:
//! scale so the longest edge spans the canvas, flip Y (fonts are Y-up, SVG
//! is Y-down) and translate the box's upper-left corner to the origin. In
//! `kurbo` coefficient order `[a, b, c, d, e, f]`:
//!
//! ```text
//! x' = a·x + c·y + e
//! y' = b·x + d·y + f
//! ```
//!
//! The [`Transformable`] trait applies such a map uniformly to every
//! geometric value of an outline.

use crate::bbox::BoundingBox;
use crate::error::GraphicsError;
use crate::types::{Affine, BezPath, PathEl, Point, Scalar};

// ---------------------------------------------------------------------------
// Transformable trait
// ---------------------------------------------------------------------------

/// A type that can be transformed by an [`Affine`].
pub trait Transformable {
    /// Apply a transform, returning the transformed value.
    #[must_use]
    fn transformed(&self, t: &Affine) -> Self;
}

impl Transformable for Point {
    #[inline]
    fn transformed(&self, t: &Affine) -> Self {
        *t * *self
    }
}

impl Transformable for PathEl {
    /// Every point of the command goes through the same map; the command
    /// kind and its arity never change.
    fn transformed(&self, t: &Affine) -> Self {
        match *self {
            Self::MoveTo(p) => Self::MoveTo(p.transformed(t)),
            Self::LineTo(p) => Self::LineTo(p.transformed(t)),
            Self::QuadTo(p1, p2) => Self::QuadTo(p1.transformed(t), p2.transformed(t)),
            Self::CurveTo(p1, p2, p3) => {
                Self::CurveTo(p1.transformed(t), p2.transformed(t), p3.transformed(t))
            }
            Self::ClosePath => Self::ClosePath,
        }
    }
}

impl Transformable for BezPath {
    fn transformed(&self, t: &Affine) -> Self {
        self.elements().iter().map(|el| el.transformed(t)).collect()
    }
}

impl Transformable for BoundingBox {
    /// Bounding box of the four transformed corners.
    fn transformed(&self, t: &Affine) -> Self {
        self.corners().iter().map(|p| p.transformed(t)).collect()
    }
}

// ---------------------------------------------------------------------------
// Canvas fitting
// ---------------------------------------------------------------------------

/// The normalization of one glyph onto a square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFit {
    /// Design units to canvas units.
    pub transform: Affine,
    /// Uniform scale factor (`a` and `-d` of the transform).
    pub scale: Scalar,
    /// Canvas width of the glyph, rounded to whole units.
    pub width: u32,
    /// Canvas height of the glyph, rounded to whole units.
    pub height: u32,
}

/// Build the transform that maps `bbox` onto a canvas whose longest edge
/// is `canvas_size` units, Y pointing down, box anchored at the origin.
///
/// A box with zero width or height (including the zero box of an empty
/// glyph) is treated as `canvas_size × canvas_size` design units, which
/// gives a unit scale instead of a division by zero.
///
/// # Errors
///
/// Returns [`GraphicsError::ZeroCanvas`] if `canvas_size` is 0.
pub fn fit_to_canvas(bbox: &BoundingBox, canvas_size: u32) -> Result<CanvasFit, GraphicsError> {
    if canvas_size == 0 {
        return Err(GraphicsError::ZeroCanvas);
    }
    let size = Scalar::from(canvas_size);
    let (width, height) = if bbox.is_degenerate() {
        (size, size)
    } else {
        (bbox.width(), bbox.height())
    };
    let scale = size / width.max(height);
    let transform = Affine::new([
        scale,
        0.0,
        0.0,
        -scale,
        -bbox.min_x * scale,
        bbox.max_y * scale,
    ]);
    Ok(CanvasFit {
        transform,
        scale,
        width: round_extent(width * scale),
        height: round_extent(height * scale),
    })
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "extents are non-negative and bounded by the canvas size"
)]
fn round_extent(v: Scalar) -> u32 {
    v.round().max(0.0) as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
