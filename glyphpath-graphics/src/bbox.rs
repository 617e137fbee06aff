//! Axis-aligned bounding boxes of glyph outlines.
//!
//! Provides [`BoundingBox`] and the control-point bound of an outline
//! program, used when a font does not report a glyph's bounds itself.

use crate::types::{OutlineProgram, Point, Scalar, command_points};

// ---------------------------------------------------------------------------
// BoundingBox type
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box, in font design units unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: Scalar,
    pub min_y: Scalar,
    pub max_x: Scalar,
    pub max_y: Scalar,
}

impl BoundingBox {
    /// An empty (inverted) bounding box, the identity for accumulation.
    pub const EMPTY: Self = Self {
        min_x: Scalar::INFINITY,
        min_y: Scalar::INFINITY,
        max_x: Scalar::NEG_INFINITY,
        max_y: Scalar::NEG_INFINITY,
    };

    /// The zero box: "this glyph has no visible outline".
    pub const DEGENERATE: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    #[must_use]
    pub const fn new(min_x: Scalar, min_y: Scalar, max_x: Scalar, max_y: Scalar) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Check if this bounding box is valid (non-empty).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Whether the box has no area: zero width or zero height.
    ///
    /// The zero box and boxes of single points or straight strokes all
    /// count; none of them can be scaled by their longest edge alone.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> Scalar {
        if self.is_valid() {
            self.max_x - self.min_x
        } else {
            0.0
        }
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> Scalar {
        if self.is_valid() {
            self.max_y - self.min_y
        } else {
            0.0
        }
    }

    /// The four corners, counter-clockwise from lower-left.
    #[must_use]
    pub const fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Expand to include a point.
    pub const fn include_point(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Point> for BoundingBox {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |mut bb, p| {
            bb.include_point(p);
            bb
        })
    }
}

// ---------------------------------------------------------------------------
// Bounding box computation helpers
// ---------------------------------------------------------------------------

/// Bounding box of every coordinate referenced by an outline program,
/// control points included.
///
/// Returns `None` when the program references no coordinates at all.
#[must_use]
pub fn program_bbox(program: &OutlineProgram) -> Option<BoundingBox> {
    let bb: BoundingBox = program
        .elements()
        .iter()
        .flat_map(|el| command_points(*el))
        .collect();
    bb.is_valid().then_some(bb)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "exact float comparisons are intentional in tests"
)]
mod tests {
    use super::*;
    use crate::types::{BezPath, EPSILON, PathEl};

    #[test]
    fn test_bounding_box_empty() {
        let bb = BoundingBox::EMPTY;
        assert!(!bb.is_valid());
        assert_eq!(bb.width(), 0.0);
        assert_eq!(bb.height(), 0.0);
    }

    #[test]
    fn test_degenerate_box() {
        assert!(BoundingBox::DEGENERATE.is_valid());
        assert!(BoundingBox::DEGENERATE.is_degenerate());
        assert!(BoundingBox::new(0.0, 5.0, 100.0, 5.0).is_degenerate());
        assert!(!BoundingBox::new(0.0, 0.0, 100.0, 200.0).is_degenerate());
    }

    #[test]
    fn test_bounding_box_include_point() {
        let mut bb = BoundingBox::EMPTY;
        bb.include_point(Point::new(1.0, 2.0));
        bb.include_point(Point::new(5.0, 8.0));
        assert!(bb.is_valid());
        assert!((bb.min_x - 1.0).abs() < EPSILON);
        assert!((bb.min_y - 2.0).abs() < EPSILON);
        assert!((bb.max_x - 5.0).abs() < EPSILON);
        assert!((bb.max_y - 8.0).abs() < EPSILON);
    }

    #[test]
    fn test_program_bbox_includes_control_points() {
        let mut program = BezPath::new();
        program.push(PathEl::MoveTo(Point::new(0.0, 0.0)));
        program.push(PathEl::QuadTo(Point::new(50.0, 120.0), Point::new(100.0, 0.0)));
        program.push(PathEl::ClosePath);
        let bb = program_bbox(&program).unwrap_or(BoundingBox::EMPTY);
        assert_eq!(bb, BoundingBox::new(0.0, 0.0, 100.0, 120.0));
    }

    #[test]
    fn test_program_bbox_empty_program() {
        assert!(program_bbox(&BezPath::new()).is_none());
        let mut only_close = BezPath::new();
        only_close.push(PathEl::ClosePath);
        assert!(program_bbox(&only_close).is_none());
    }

    #[test]
    fn test_bounding_box_corners() {
        let bb = BoundingBox::new(1.0, 2.0, 5.0, 8.0);
        let [ll, lr, ur, ul] = bb.corners();
        assert_eq!(ll, Point::new(1.0, 2.0));
        assert_eq!(lr, Point::new(5.0, 2.0));
        assert_eq!(ur, Point::new(5.0, 8.0));
        assert_eq!(ul, Point::new(1.0, 8.0));
    }
}
