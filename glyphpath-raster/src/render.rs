//! Glyph rasterization with `tiny-skia`.

use glyphpath_core::{
    PipelineError, PipelineResult, ThumbnailConfig, resolve_bounds, resolve_glyph,
    transformed_outline,
};
use glyphpath_fonts::FontSource;
use glyphpath_graphics::BoundingBox;
use kurbo::{Affine, BezPath, PathEl};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::raster_error;

/// Map design units onto a `size`-pixel square at `pixels_per_em`, Y down,
/// with the centre of `bbox` on the centre of the square.
#[must_use]
pub fn thumbnail_transform(
    bbox: &BoundingBox,
    units_per_em: u16,
    size: u32,
    pixels_per_em: f64,
) -> Affine {
    let scale = pixels_per_em / f64::from(units_per_em.max(1));
    let half = f64::from(size) / 2.0;
    let cx = (bbox.min_x + bbox.max_x) / 2.0;
    let cy = (bbox.min_y + bbox.max_y) / 2.0;
    Affine::new([scale, 0.0, 0.0, -scale, half - cx * scale, half + cy * scale])
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel coordinates fit comfortably in f32"
)]
fn to_skia(program: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in program.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

/// Draw `ch` in black on a white square.
///
/// A glyph without geometry yields a blank image.
///
/// # Errors
///
/// Returns [`glyphpath_core::ErrorKind::MissingGlyph`] if the font lacks
/// `ch`, a traversal failure if its outline is broken, or a thumbnail
/// error if the canvas cannot be allocated.
pub fn render_glyph(
    source: &FontSource,
    ch: char,
    config: &ThumbnailConfig,
) -> PipelineResult<Pixmap> {
    let glyph_id = resolve_glyph(source, ch).ok_or_else(|| PipelineError::missing_glyph(ch))?;
    let size = config.size_px.get();
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| raster_error(format!("cannot allocate {size}x{size} canvas")))?;
    pixmap.fill(Color::WHITE);

    let bbox = resolve_bounds(source, glyph_id)?;
    let pixels_per_em = config.font_scale * f64::from(size);
    let transform = thumbnail_transform(&bbox, source.units_per_em(), size, pixels_per_em);
    let program = transformed_outline(source, glyph_id, transform)?;

    if let Some(path) = to_skia(&program) {
        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
    Ok(pixmap)
}
