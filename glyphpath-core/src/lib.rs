//! Glyph-outline-to-SVG pipeline.
//!
//! For each character of an ordering list, [`glyph::vectorize`] resolves
//! the glyph in a font, finds its bounds, fits it onto a square canvas and
//! serializes the transformed outline as a canonical SVG document.
//! [`batch::export_font`] drives that over a whole font and writes the
//! results through an [`ArtifactSink`].

pub mod batch;
pub mod config;
pub mod error;
pub mod glyph;
pub mod naming;
pub mod order;
pub mod sink;
pub mod visitor;

pub use batch::{FontReport, ThumbnailRenderer, export_font};
pub use config::{ExportConfig, PipelineConfig, ThumbnailConfig};
pub use error::{ErrorKind, PipelineError, PipelineResult};
pub use glyph::{resolve_bounds, resolve_glyph, transformed_outline, vectorize};
pub use naming::{artifact_path, file_stem};
pub use order::{load_order, parse_order};
pub use sink::{ArtifactSink, MemorySink};
