//! JPEG thumbnails for `glyphpath` exports.
//!
//! [`JpegThumbnailer`] plugs into [`glyphpath_core::export_font`] and
//! writes one white square image per character, the glyph drawn in black
//! and centred on its ink.

mod error;
pub mod jpeg;
pub mod render;

use glyphpath_core::{PipelineResult, ThumbnailConfig, ThumbnailRenderer};
use glyphpath_fonts::FontSource;
use log::trace;

pub use jpeg::encode_jpeg;
pub use render::{render_glyph, thumbnail_transform};

/// Renders glyphs with `tiny-skia` and encodes them as JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegThumbnailer;

impl ThumbnailRenderer for JpegThumbnailer {
    fn kind(&self) -> &'static str {
        "jpg"
    }

    fn render(
        &self,
        source: &FontSource,
        ch: char,
        config: &ThumbnailConfig,
    ) -> PipelineResult<Vec<u8>> {
        let pixmap = render_glyph(source, ch, config)?;
        let bytes = encode_jpeg(&pixmap, config.jpeg_quality)?;
        trace!("thumbnail {ch:?}: {} bytes", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use std::sync::Arc;

    use glyphpath_core::{ExportConfig, MemorySink, export_font};
    use glyphpath_fonts::synthetic::SyntheticFont;

    use super::*;

    #[test]
    fn export_writes_svg_and_jpg() {
        let bytes = SyntheticFont::new(1000)
            .rectangle('H', 50, 0, 450, 700)
            .build();
        let source = FontSource::from_bytes(Arc::from(bytes), 0).expect("parses");
        let config = ExportConfig {
            thumbnail: Some(ThumbnailConfig::with_size(64).expect("config")),
            ..ExportConfig::default()
        };
        let mut sink = MemorySink::new();
        let report = export_font(
            &source,
            "Block",
            &['H', 'x'],
            &config,
            Some(&JpegThumbnailer),
            &mut sink,
        );
        assert_eq!((report.written, report.skipped, report.failed), (1, 1, 0));
        let jpg = sink
            .get(&std::path::Path::new("Block").join("jpg").join("H.jpg"))
            .expect("thumbnail written");
        let decoded = image::load_from_memory(jpg).expect("decodes");
        assert_eq!(decoded.to_rgb8().dimensions(), (64, 64));
    }
}
