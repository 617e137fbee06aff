//! Per-character pipeline: resolve, measure, normalize, serialize.

use glyphpath_fonts::{FontError, FontSource, GlyphRect};
use glyphpath_graphics::bbox::program_bbox;
use glyphpath_graphics::types::{Affine, OutlineProgram};
use glyphpath_graphics::{BoundingBox, fit_to_canvas};
use glyphpath_svg::{VectorDocument, serialize_path};
use log::debug;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::visitor::{OutlineRecorder, TransformingSink};

/// Glyph id for `ch` in the font's best codepoint table, or `None` if the
/// font does not cover it.
#[must_use]
pub fn resolve_glyph(source: &FontSource, ch: char) -> Option<u16> {
    source.glyph_id(ch)
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// One way of obtaining a glyph's bounds. `Ok(None)` passes to the next.
type BoundsStrategy = fn(&FontSource, u16) -> Result<Option<BoundingBox>, FontError>;

/// Strategies in order of preference.
const BOUNDS_CHAIN: [BoundsStrategy; 2] = [precomputed_bounds, recorded_bounds];

const fn to_bbox(r: GlyphRect) -> BoundingBox {
    BoundingBox::new(r.x_min, r.y_min, r.x_max, r.y_max)
}

/// Bounds stored in the font's glyph table.
#[expect(
    clippy::unnecessary_wraps,
    reason = "must match the signature of the other strategies"
)]
fn precomputed_bounds(source: &FontSource, glyph_id: u16) -> Result<Option<BoundingBox>, FontError> {
    Ok(source.precomputed_bounds(glyph_id).map(to_bbox))
}

/// Bounds of every point of a full traversal, control points included.
fn recorded_bounds(source: &FontSource, glyph_id: u16) -> Result<Option<BoundingBox>, FontError> {
    let mut recorder = OutlineRecorder::new();
    source.outline(glyph_id, &mut recorder)?;
    Ok(program_bbox(recorder.program()))
}

/// Bounding box of a glyph in design units.
///
/// Takes the first box any strategy yields; a glyph with no geometry gets
/// [`BoundingBox::DEGENERATE`].
///
/// # Errors
///
/// Returns a traversal failure if replaying the outline fails.
pub fn resolve_bounds(source: &FontSource, glyph_id: u16) -> PipelineResult<BoundingBox> {
    for strategy in BOUNDS_CHAIN {
        if let Some(bbox) = strategy(source, glyph_id)? {
            return Ok(bbox);
        }
    }
    Ok(BoundingBox::DEGENERATE)
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

/// Replay a glyph's outline with `transform` applied to every point.
///
/// An empty glyph yields an empty program.
///
/// # Errors
///
/// Returns a traversal failure if replaying the outline fails.
pub fn transformed_outline(
    source: &FontSource,
    glyph_id: u16,
    transform: Affine,
) -> PipelineResult<OutlineProgram> {
    let mut recorder = OutlineRecorder::new();
    source.outline(glyph_id, &mut TransformingSink::new(transform, &mut recorder))?;
    Ok(recorder.finish())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Turn one character of one font into a normalized vector document.
///
/// # Errors
///
/// Returns [`crate::ErrorKind::MissingGlyph`] when the font does not cover
/// `ch`, or a traversal failure when its outline cannot be replayed. Both
/// carry the character.
pub fn vectorize(
    source: &FontSource,
    ch: char,
    config: &PipelineConfig,
) -> PipelineResult<VectorDocument> {
    let glyph_id = resolve_glyph(source, ch).ok_or_else(|| PipelineError::missing_glyph(ch))?;
    vectorize_glyph(source, glyph_id, config).map_err(|e| e.with_character(ch))
}

fn vectorize_glyph(
    source: &FontSource,
    glyph_id: u16,
    config: &PipelineConfig,
) -> PipelineResult<VectorDocument> {
    let bbox = resolve_bounds(source, glyph_id)?;
    let fit = fit_to_canvas(&bbox, config.canvas_size.get())?;
    let program = transformed_outline(source, glyph_id, fit.transform)?;
    debug!(
        "glyph {glyph_id}: {} commands, scale {:.4}, canvas {}x{}",
        program.elements().len(),
        fit.scale,
        fit.width,
        fit.height
    );
    Ok(VectorDocument::new(
        fit.width,
        fit.height,
        serialize_path(&program),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use std::sync::Arc;

    use glyphpath_fonts::OutlineSink;
    use glyphpath_fonts::synthetic::SyntheticFont;
    use glyphpath_graphics::Transformable;

    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> FontSource {
        let bytes = SyntheticFont::new(1000)
            .rectangle('I', 0, 0, 100, 200)
            .empty(' ')
            .glyph(
                'o',
                vec![vec![
                    (50, 0, true),
                    (100, 0, false),
                    (100, 50, true),
                    (100, 100, false),
                    (50, 100, true),
                    (0, 100, false),
                    (0, 50, true),
                    (0, 0, false),
                ]],
            )
            .malformed('m')
            .dangling('x', 999)
            .build();
        FontSource::from_bytes(Arc::from(bytes), 0).expect("synthetic font parses")
    }

    #[test]
    fn rectangle_fills_tall_canvas() {
        let font = sample();
        let gid = resolve_glyph(&font, 'I').expect("I is mapped");
        let bbox = resolve_bounds(&font, gid).expect("bounds");
        assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 100.0, 200.0));

        let fit = fit_to_canvas(&bbox, 1024).expect("fit");
        assert!((fit.scale - 5.12).abs() < 1e-12);
        let [_, _, _, _, e, f] = fit.transform.as_coeffs();
        assert!(e.abs() < 1e-12);
        assert!((f - 1024.0).abs() < 1e-9);

        let doc = vectorize(&font, 'I', &PipelineConfig::default()).expect("vectorizes");
        assert_eq!((doc.width, doc.height), (512, 1024));
        assert!(doc.path_data.as_str().starts_with("M0 1024 "), "{}", doc.path_data);
        assert!(doc.path_data.as_str().ends_with(" Z"), "{}", doc.path_data);
        for corner in ["0 1024", "512 1024", "512 0", "0 0"] {
            assert!(doc.path_data.as_str().contains(corner), "missing {corner}");
        }
    }

    #[test]
    fn space_becomes_single_move() {
        let font = sample();
        let doc = vectorize(&font, ' ', &PipelineConfig::default()).expect("vectorizes");
        assert_eq!((doc.width, doc.height), (1024, 1024));
        assert_eq!(doc.path_data.as_str(), "M0 0");
    }

    #[test]
    fn empty_glyph_has_degenerate_bounds() {
        let font = sample();
        let gid = resolve_glyph(&font, ' ').expect("space is mapped");
        assert_eq!(
            resolve_bounds(&font, gid).expect("bounds"),
            BoundingBox::DEGENERATE
        );
        let program = transformed_outline(&font, gid, Affine::IDENTITY).expect("outline");
        assert!(program.elements().is_empty());
    }

    #[test]
    fn transformed_points_stay_on_canvas() {
        let font = sample();
        let config = PipelineConfig::with_canvas_size(256).expect("config");
        let gid = resolve_glyph(&font, 'o').expect("o is mapped");
        let bbox = resolve_bounds(&font, gid).expect("bounds");
        let fit = fit_to_canvas(&bbox, config.canvas_size.get()).expect("fit");
        let program = transformed_outline(&font, gid, fit.transform).expect("outline");
        let canvas = program_bbox(&program).expect("non-empty");
        assert!(canvas.min_x >= -1e-9 && canvas.min_y >= -1e-9);
        assert!(canvas.max_x <= 256.0 + 1e-9 && canvas.max_y <= 256.0 + 1e-9);
        assert_eq!(fit.width.max(fit.height), 256);
    }

    #[test]
    fn unmapped_character_is_missing_glyph() {
        let font = sample();
        let err = vectorize(&font, 'Q', &PipelineConfig::default()).expect_err("not covered");
        assert_eq!(err.kind, ErrorKind::MissingGlyph);
        assert_eq!(err.character, Some('Q'));
    }

    #[test]
    fn dangling_mapping_is_traversal_failure() {
        let font = sample();
        let err = vectorize(&font, 'x', &PipelineConfig::default()).expect_err("out of range");
        assert_eq!(err.kind, ErrorKind::TraversalFailure);
        assert_eq!(err.character, Some('x'));
    }

    #[test]
    fn corrupt_glyph_is_traversal_failure() {
        let font = sample();
        let err = vectorize(&font, 'm', &PipelineConfig::default()).expect_err("corrupt record");
        assert_eq!(err.kind, ErrorKind::TraversalFailure);
        assert_eq!(err.character, Some('m'));
    }

    #[test]
    fn fractional_bounds_keep_outline_on_canvas() {
        // A CFF-style outline with fractional extremes: the recorded box is
        // exact, so nothing lands left of or above the canvas origin.
        let mut rec = OutlineRecorder::new();
        rec.move_to(-10.7, 0.25);
        rec.curve_to(100.0, 700.9, 400.0, 700.9, 500.6, -3.5);
        rec.line_to(-10.7, 0.25);
        rec.close();
        let program = rec.finish();
        let bbox = program_bbox(&program).expect("non-empty");
        assert!((bbox.min_x + 10.7).abs() < 1e-9);
        assert!((bbox.max_x - 500.6).abs() < 1e-9);

        let fit = fit_to_canvas(&bbox, 1024).expect("fit");
        let canvas = program_bbox(&program.transformed(&fit.transform)).expect("non-empty");
        assert!(canvas.min_x >= -1e-9 && canvas.min_y >= -1e-9, "{canvas:?}");
        assert!(canvas.max_x <= f64::from(fit.width) + 0.5, "{canvas:?}");
        assert!(canvas.max_y <= f64::from(fit.height) + 0.5, "{canvas:?}");
    }

    #[test]
    fn vectorizing_twice_is_identical() {
        let font = sample();
        let config = PipelineConfig::default();
        let a = vectorize(&font, 'o', &config).expect("first");
        let b = vectorize(&font, 'o', &config).expect("second");
        assert_eq!(a.to_svg_string(), b.to_svg_string());
    }
}
