//! Per-font export.
//!
//! Runs every character of an ordering through the pipeline for one font
//! and hands the resulting artifacts to an [`ArtifactSink`]. Characters
//! the font lacks are skipped silently; other per-character failures are
//! logged and counted, never raised.

use std::fmt;

use glyphpath_fonts::FontSource;
use log::{debug, info, warn};

use crate::config::{ExportConfig, ThumbnailConfig};
use crate::error::{ErrorKind, PipelineError, PipelineResult};
use crate::glyph::vectorize;
use crate::naming::artifact_path;
use crate::sink::ArtifactSink;

/// Sub-directory and extension of vector artifacts.
pub const VECTOR_KIND: &str = "svg";

/// Renders a raster thumbnail of one character.
pub trait ThumbnailRenderer {
    /// Sub-directory and extension of the produced images, e.g. `"jpg"`.
    fn kind(&self) -> &'static str;

    /// Encoded image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingGlyph`] if the font lacks `ch`, or
    /// [`ErrorKind::Thumbnail`] if rendering or encoding fails.
    fn render(
        &self,
        source: &FontSource,
        ch: char,
        config: &ThumbnailConfig,
    ) -> PipelineResult<Vec<u8>>;
}

/// What happened to one font's characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontReport {
    pub font_name: String,
    /// Characters for which every requested artifact was written.
    pub written: usize,
    /// Characters the font does not cover.
    pub skipped: usize,
    /// Characters that failed for any other reason.
    pub failed: usize,
}

impl fmt::Display for FontReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} written, {} skipped, {} failed",
            self.font_name, self.written, self.skipped, self.failed
        )
    }
}

/// Export `chars` of one font.
///
/// Writes `<font_name>/svg/<stem>.svg` for every covered character and,
/// when both `config.thumbnail` and `thumbnails` are given,
/// `<font_name>/<kind>/<stem>.<kind>` as well.
pub fn export_font(
    source: &FontSource,
    font_name: &str,
    chars: &[char],
    config: &ExportConfig,
    thumbnails: Option<&dyn ThumbnailRenderer>,
    sink: &mut dyn ArtifactSink,
) -> FontReport {
    let mut report = FontReport {
        font_name: font_name.to_owned(),
        ..FontReport::default()
    };
    let raster = config.thumbnail.as_ref().zip(thumbnails);

    for &ch in chars {
        match export_char(source, font_name, ch, config, raster, sink) {
            Ok(()) => report.written += 1,
            Err(e) if e.kind.is_skip() => {
                debug!("{font_name}: {e}");
                report.skipped += 1;
            }
            Err(e) => {
                warn!("{font_name}: {e}");
                report.failed += 1;
            }
        }
    }
    info!("{report}");
    report
}

fn export_char(
    source: &FontSource,
    font_name: &str,
    ch: char,
    config: &ExportConfig,
    raster: Option<(&ThumbnailConfig, &dyn ThumbnailRenderer)>,
    sink: &mut dyn ArtifactSink,
) -> PipelineResult<()> {
    let document = vectorize(source, ch, &config.pipeline)?;
    let path = artifact_path(font_name, VECTOR_KIND, ch);
    sink.write(&path, document.to_svg_string().as_bytes())
        .map_err(|e| write_error(&path, &e, ch))?;

    if let Some((thumb_config, renderer)) = raster {
        let image = renderer
            .render(source, ch, thumb_config)
            .map_err(|e| e.with_character(ch))?;
        let path = artifact_path(font_name, renderer.kind(), ch);
        sink.write(&path, &image)
            .map_err(|e| write_error(&path, &e, ch))?;
    }
    Ok(())
}

fn write_error(path: &std::path::Path, e: &std::io::Error, ch: char) -> PipelineError {
    PipelineError::new(ErrorKind::Io, format!("{}: {e}", path.display())).with_character(ch)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
