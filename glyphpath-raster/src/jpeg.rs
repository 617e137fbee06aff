//! JPEG encoding of rendered thumbnails.

use image::ColorType;
use image::codecs::jpeg::JpegEncoder;
use tiny_skia::Pixmap;

use glyphpath_core::PipelineResult;

use crate::error::raster_error;

/// Drop the alpha channel of an opaque pixmap.
///
/// Pixels are premultiplied, which equals straight colour once alpha is
/// 255; thumbnails are always painted over an opaque background.
#[must_use]
pub fn to_rgb(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}

/// Encode as baseline RGB JPEG at `quality` (clamped to 1..=100).
///
/// # Errors
///
/// Returns a thumbnail error if the encoder fails.
pub fn encode_jpeg(pixmap: &Pixmap, quality: u8) -> PipelineResult<Vec<u8>> {
    let rgb = to_rgb(pixmap);
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .encode(&rgb, pixmap.width(), pixmap.height(), ColorType::Rgb8)
        .map_err(|e| raster_error(format!("jpeg encoding: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use tiny_skia::Color;

    use super::*;

    #[test]
    fn encodes_decodable_rgb() {
        let mut pixmap = Pixmap::new(16, 8).expect("pixmap");
        pixmap.fill(Color::WHITE);
        assert_eq!(to_rgb(&pixmap).len(), 16 * 8 * 3);

        let bytes = encode_jpeg(&pixmap, 95).expect("encodes");
        assert_eq!(&bytes[..2], &[0xFF, 0xD8], "JPEG SOI marker");
        let decoded = image::load_from_memory(&bytes).expect("decodes");
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8().dimensions(), (16, 8));
    }
}
