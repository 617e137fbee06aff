//! Outline visitors.
//!
//! Bridges [`OutlineSink`] from `glyphpath-fonts` onto `kurbo` geometry.
//! A traversal can be recorded as-is (for measuring) or passed through a
//! [`TransformingSink`] first (for normalization); both end in an
//! [`OutlineRecorder`].

use glyphpath_fonts::OutlineSink;
use glyphpath_graphics::types::{Affine, BezPath, OutlineProgram, PathEl, Point};
use glyphpath_graphics::Transformable;

/// Records a traversal as an [`OutlineProgram`].
#[derive(Debug, Default)]
pub struct OutlineRecorder {
    program: BezPath,
}

impl OutlineRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    #[must_use]
    pub const fn program(&self) -> &OutlineProgram {
        &self.program
    }

    #[must_use]
    pub fn finish(self) -> OutlineProgram {
        self.program
    }
}

impl OutlineSink for OutlineRecorder {
    fn move_to(&mut self, x: f64, y: f64) {
        self.program.push(PathEl::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.program.push(PathEl::LineTo(Point::new(x, y)));
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.program
            .push(PathEl::QuadTo(Point::new(x1, y1), Point::new(x, y)));
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.program.push(PathEl::CurveTo(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x, y),
        ));
    }

    fn close(&mut self) {
        self.program.push(PathEl::ClosePath);
    }
}

/// Applies an affine map to every point, then forwards the command
/// unchanged in kind to the wrapped sink.
pub struct TransformingSink<'a> {
    transform: Affine,
    inner: &'a mut dyn OutlineSink,
}

impl<'a> TransformingSink<'a> {
    #[must_use]
    pub fn new(transform: Affine, inner: &'a mut dyn OutlineSink) -> Self {
        Self { transform, inner }
    }

    fn map(&self, x: f64, y: f64) -> Point {
        Point::new(x, y).transformed(&self.transform)
    }
}

impl OutlineSink for TransformingSink<'_> {
    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.map(x, y);
        self.inner.move_to(p.x, p.y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.map(x, y);
        self.inner.line_to(p.x, p.y);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        let c = self.map(x1, y1);
        let p = self.map(x, y);
        self.inner.quad_to(c.x, c.y, p.x, p.y);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p = self.map(x, y);
        self.inner.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
    }

    fn close(&mut self) {
        self.inner.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(sink: &mut dyn OutlineSink) {
        sink.move_to(0.0, 0.0);
        sink.line_to(10.0, 0.0);
        sink.quad_to(10.0, 10.0, 0.0, 10.0);
        sink.curve_to(-1.0, 8.0, -1.0, 2.0, 0.0, 0.0);
        sink.close();
    }

    #[test]
    fn recorder_keeps_command_kinds_in_order() {
        let mut rec = OutlineRecorder::new();
        draw(&mut rec);
        let kinds: Vec<_> = rec
            .program()
            .elements()
            .iter()
            .map(std::mem::discriminant)
            .collect();
        let expected: Vec<_> = [
            PathEl::MoveTo(Point::ZERO),
            PathEl::LineTo(Point::ZERO),
            PathEl::QuadTo(Point::ZERO, Point::ZERO),
            PathEl::CurveTo(Point::ZERO, Point::ZERO, Point::ZERO),
            PathEl::ClosePath,
        ]
        .iter()
        .map(std::mem::discriminant)
        .collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn transforming_sink_maps_every_point() {
        let mut rec = OutlineRecorder::new();
        {
            let flip = Affine::new([2.0, 0.0, 0.0, -2.0, 5.0, 100.0]);
            let mut sink = TransformingSink::new(flip, &mut rec);
            draw(&mut sink);
        }
        let program = rec.finish();
        let els = program.elements();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(5.0, 100.0)));
        assert_eq!(els[1], PathEl::LineTo(Point::new(25.0, 100.0)));
        assert_eq!(
            els[2],
            PathEl::QuadTo(Point::new(25.0, 80.0), Point::new(5.0, 80.0))
        );
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn identity_transform_is_transparent() {
        let mut direct = OutlineRecorder::new();
        draw(&mut direct);
        let mut through = OutlineRecorder::new();
        draw(&mut TransformingSink::new(Affine::IDENTITY, &mut through));
        assert_eq!(direct.finish(), through.finish());
    }
}
