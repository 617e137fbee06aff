//! SVG output for `glyphpath`.
//!
//! Turns a glyph's outline program (a `kurbo::BezPath` already in canvas
//! coordinates) into canonical path text and wraps it in a minimal SVG
//! document built with the `svg` crate.
//!
//! Key design points:
//! - Raw path data is written as a plain `d` string with full `f64`
//!   precision (the `svg` crate's `Data` builder uses `f32`), then
//!   canonicalized: integer coordinates, one space between tokens.
//! - An empty outline still produces a path (`M0 0`), so every document is
//!   drawable.
//! - Documents carry no styling beyond a single black fill.

pub mod canonical;
pub mod document;
pub mod path_data;

use kurbo::BezPath;

pub use canonical::{CanonicalPath, canonicalize};
pub use document::VectorDocument;
pub use path_data::{FALLBACK_PATH, render_path_data};

/// Render and canonicalize an outline program.
#[must_use]
pub fn serialize_path(program: &BezPath) -> CanonicalPath {
    canonicalize(&render_path_data(program))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Point};

    #[test]
    fn empty_program_serializes_to_single_move() {
        assert_eq!(serialize_path(&BezPath::new()).as_str(), "M0 0");
    }

    #[test]
    fn serialization_is_deterministic() {
        let mut path = BezPath::new();
        path.push(PathEl::MoveTo(Point::new(0.0, 1024.000_000_000_000_2)));
        path.push(PathEl::LineTo(Point::new(512.000_000_000_000_1, 1024.0)));
        path.push(PathEl::CurveTo(
            Point::new(400.4, 300.5),
            Point::new(200.5, -0.3),
            Point::new(0.0, 0.0),
        ));
        path.push(PathEl::ClosePath);
        let a = serialize_path(&path);
        let b = serialize_path(&path);
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "M0 1024 L512 1024 C400 301 201 0 0 0 Z");
    }
}
