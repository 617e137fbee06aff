//! Pipeline configuration.
//!
//! Settings are plain values passed into each entry point; nothing is
//! process-wide, so runs with different settings can proceed side by side.

use std::num::NonZeroU32;

use crate::error::{ErrorKind, PipelineError, PipelineResult};

/// Longest edge of a vector glyph document, in output units.
pub const DEFAULT_CANVAS_SIZE: NonZeroU32 = non_zero(1024);

/// Edge length of a raster thumbnail, in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: NonZeroU32 = non_zero(512);

/// Pixels per em relative to the thumbnail edge.
pub const DEFAULT_THUMBNAIL_FONT_SCALE: f64 = 0.75;

pub const DEFAULT_JPEG_QUALITY: u8 = 95;

const fn non_zero(v: u32) -> NonZeroU32 {
    match NonZeroU32::new(v) {
        Some(n) => n,
        None => NonZeroU32::MIN,
    }
}

/// Settings of the glyph-to-vector pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Longest edge of every emitted document.
    pub canvas_size: NonZeroU32,
}

impl PipelineConfig {
    /// # Errors
    ///
    /// Returns [`ErrorKind::Config`] for a size of 0.
    pub fn with_canvas_size(size: u32) -> PipelineResult<Self> {
        NonZeroU32::new(size)
            .map(|canvas_size| Self { canvas_size })
            .ok_or_else(|| PipelineError::new(ErrorKind::Config, "canvas size must be positive"))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

/// Settings of the raster thumbnail collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailConfig {
    /// Square image edge in pixels.
    pub size_px: NonZeroU32,
    /// Font size as a fraction of `size_px`.
    pub font_scale: f64,
    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,
}

impl ThumbnailConfig {
    /// # Errors
    ///
    /// Returns [`ErrorKind::Config`] for a size of 0.
    pub fn with_size(size_px: u32) -> PipelineResult<Self> {
        NonZeroU32::new(size_px)
            .map(|size_px| Self {
                size_px,
                ..Self::default()
            })
            .ok_or_else(|| PipelineError::new(ErrorKind::Config, "thumbnail size must be positive"))
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            size_px: DEFAULT_THUMBNAIL_SIZE,
            font_scale: DEFAULT_THUMBNAIL_FONT_SCALE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Everything a per-font export needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExportConfig {
    pub pipeline: PipelineConfig,
    /// `Some` when raster thumbnails are requested.
    pub thumbnail: Option<ThumbnailConfig>,
}
