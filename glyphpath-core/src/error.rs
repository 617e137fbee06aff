//! Error types for the glyph pipeline.
//!
//! Failures are reported per character so that one bad glyph never stops
//! the rest of a font, and one bad font never stops the rest of a batch.

use std::fmt;

use glyphpath_fonts::FontError;
use glyphpath_graphics::GraphicsError;

// ---------------------------------------------------------------------------
// Error kinds
// ---------------------------------------------------------------------------

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The character has no entry in the font's codepoint table. Expected;
    /// the character is skipped for this font only.
    MissingGlyph,
    /// The glyph's outline program could not be replayed.
    TraversalFailure,
    /// The font program could not be opened or parsed at all.
    SourceOpen,
    /// Reading inputs or writing artifacts failed.
    Io,
    /// Invalid configuration or input description.
    Config,
    /// The thumbnail renderer failed.
    Thumbnail,
}

impl ErrorKind {
    /// Whether this is an expected skip rather than a failure worth
    /// reporting.
    #[must_use]
    pub const fn is_skip(self) -> bool {
        matches!(self, Self::MissingGlyph)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGlyph => write!(f, "missing glyph"),
            Self::TraversalFailure => write!(f, "outline traversal failed"),
            Self::SourceOpen => write!(f, "cannot open font"),
            Self::Io => write!(f, "I/O error"),
            Self::Config => write!(f, "invalid configuration"),
            Self::Thumbnail => write!(f, "thumbnail rendering failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// An error produced while turning one font's glyphs into artifacts.
#[derive(Debug, Clone)]
pub struct PipelineError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
    /// The character being processed, if any.
    pub character: Option<char>,
}

impl PipelineError {
    /// Create a new error.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            character: None,
        }
    }

    /// The character is not covered by the font.
    #[must_use]
    pub fn missing_glyph(ch: char) -> Self {
        Self::new(ErrorKind::MissingGlyph, "not in the font's codepoint table").with_character(ch)
    }

    /// Attach the character being processed.
    #[must_use]
    pub fn with_character(mut self, ch: char) -> Self {
        self.character = Some(ch);
        self
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ch) = self.character {
            write!(f, "[U+{:04X} {ch:?}] ", u32::from(ch))?;
        }
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PipelineError {}

impl From<FontError> for PipelineError {
    fn from(e: FontError) -> Self {
        let kind = match e {
            FontError::Io { .. } | FontError::ParseError(_) | FontError::FaceIndex { .. } => {
                ErrorKind::SourceOpen
            }
            FontError::GlyphOutOfRange { .. } | FontError::MalformedOutline(_) => {
                ErrorKind::TraversalFailure
            }
        };
        Self::new(kind, e.to_string())
    }
}

impl From<GraphicsError> for PipelineError {
    fn from(e: GraphicsError) -> Self {
        Self::new(ErrorKind::Config, e.to_string())
    }
}

/// Convenience type alias for results using [`PipelineError`].
pub type PipelineResult<T> = Result<T, PipelineError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
