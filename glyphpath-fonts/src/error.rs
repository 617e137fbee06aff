//! Font loading and outline traversal errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur when opening or reading a font program.
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read.
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The font data could not be parsed.
    ParseError(String),
    /// The requested face does not exist in the font collection.
    FaceIndex {
        /// Requested face.
        index: u32,
        /// Number of faces in the file.
        count: u32,
    },
    /// A glyph id points past the end of the glyph table.
    GlyphOutOfRange {
        /// Offending glyph id.
        glyph_id: u16,
        /// Number of glyphs in the face.
        num_glyphs: u16,
    },
    /// The outline program stopped part-way through a glyph.
    MalformedOutline(u16),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::ParseError(msg) => write!(f, "font parse error: {msg}"),
            Self::FaceIndex { index, count } => {
                write!(f, "face {index} requested but the file holds {count}")
            }
            Self::GlyphOutOfRange {
                glyph_id,
                num_glyphs,
            } => write!(
                f,
                "glyph {glyph_id} is outside the glyph table ({num_glyphs} glyphs)"
            ),
            Self::MalformedOutline(gid) => write!(f, "outline of glyph {gid} is malformed"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
