//! Font source wrapper around `ttf-parser`.

use std::path::Path;
use std::sync::Arc;

use ttf_parser::{CFFError, GlyphId};

use crate::cmap;
use crate::error::FontError;
use crate::glyf;
use crate::metrics::GlyphRect;
use crate::outline::{OutlineSink, OutlineStatus};

/// A parsed, read-only font program (one face of a file).
///
/// Stores owned font bytes plus the few facts we need on every lookup.
/// A `ttf_parser::Face` is created on demand for individual queries;
/// parsing is cheap (header validation and offset table construction
/// only). Cloning shares the bytes, so a source can be handed to several
/// character-level tasks at once.
#[derive(Clone)]
pub struct FontSource {
    bytes: Arc<[u8]>,
    index: u32,
    units_per_em: u16,
    num_glyphs: u16,
    /// Best `cmap` subtable, chosen once at open time.
    cmap_subtable: Option<u16>,
    outlines: OutlineTable,
}

/// Where a face keeps its outline programs, in the order `ttf-parser`
/// consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutlineTable {
    /// `glyf`, optionally varied by `gvar`.
    Glyf,
    Cff,
    Cff2,
    /// Bitmap-only or otherwise outline-less face.
    Missing,
}

impl OutlineTable {
    fn of(face: &ttf_parser::Face<'_>) -> Self {
        let tables = face.tables();
        if tables.glyf.is_some() {
            Self::Glyf
        } else if tables.cff.is_some() {
            Self::Cff
        } else if tables.cff2.is_some() {
            Self::Cff2
        } else {
            Self::Missing
        }
    }
}

/// How a single replay ended.
enum Replay {
    Finished,
    /// The program is valid but draws nothing.
    Blank,
    Aborted,
}

impl FontSource {
    /// Read and parse face `index` of the font file at `path`.
    ///
    /// The file handle is released before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_bytes`].
    pub fn open(path: &Path, index: u32) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(Arc::from(bytes.into_boxed_slice()), index)
    }

    /// Parse face `index` from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::FaceIndex`] if `index` is past the end of a
    /// collection and [`FontError::ParseError`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>, index: u32) -> Result<Self, FontError> {
        let count = face_count(&bytes);
        if index >= count {
            return Err(FontError::FaceIndex { index, count });
        }
        let face = ttf_parser::Face::parse(&bytes, index)
            .map_err(|e| FontError::ParseError(e.to_string()))?;
        let cmap_subtable = face
            .tables()
            .cmap
            .and_then(|table| cmap::best_subtable(table.subtables));
        Ok(Self {
            outlines: OutlineTable::of(&face),
            units_per_em: face.units_per_em(),
            num_glyphs: face.number_of_glyphs(),
            cmap_subtable,
            index,
            bytes,
        })
    }

    fn face(&self) -> Result<ttf_parser::Face<'_>, FontError> {
        ttf_parser::Face::parse(&self.bytes, self.index)
            .map_err(|e| FontError::ParseError(e.to_string()))
    }

    /// Face index within the file.
    #[must_use]
    pub const fn face_index(&self) -> u32 {
        self.index
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Number of glyphs in the face.
    #[must_use]
    pub const fn num_glyphs(&self) -> u16 {
        self.num_glyphs
    }

    /// Whether the face has a usable Unicode `cmap`.
    #[must_use]
    pub const fn has_cmap(&self) -> bool {
        self.cmap_subtable.is_some()
    }

    /// Map a character to its glyph id through the best `cmap`.
    ///
    /// `None` means the character is simply not covered by this font.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        let index = self.cmap_subtable?;
        let face = self.face().ok()?;
        let subtable = face.tables().cmap?.subtables.get(index)?;
        subtable.glyph_index(u32::from(ch)).map(|g| g.0)
    }

    /// Bounding box stored in the glyph's `glyf` record, read without
    /// replaying the outline.
    ///
    /// `None` for empty glyphs, for faces whose outlines are not `glyf`
    /// (CFF boxes are only known by replay), and for unusable headers.
    #[must_use]
    pub fn precomputed_bounds(&self, glyph_id: u16) -> Option<GlyphRect> {
        if glyph_id >= self.num_glyphs || self.outlines != OutlineTable::Glyf {
            return None;
        }
        let face = self.face().ok()?;
        glyf::record(&face, glyph_id)
            .and_then(glyf::stored_bounds)
            .map(GlyphRect::from)
    }

    /// Replay the outline program of a glyph into `sink`, in design units.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::GlyphOutOfRange`] for ids past the glyph table
    /// and [`FontError::MalformedOutline`] when the glyph's data cannot be
    /// parsed, whether or not commands were already delivered. Only a glyph
    /// stored without geometry (zero-length or zero-contour `glyf` record,
    /// a charstring that draws nothing) is [`OutlineStatus::Empty`].
    pub fn outline(
        &self,
        glyph_id: u16,
        sink: &mut dyn OutlineSink,
    ) -> Result<OutlineStatus, FontError> {
        if glyph_id >= self.num_glyphs {
            return Err(FontError::GlyphOutOfRange {
                glyph_id,
                num_glyphs: self.num_glyphs,
            });
        }
        let face = self.face()?;
        let mut adapter = OutlineAdapter {
            sink,
            commands: 0,
        };
        let replay = match self.outlines {
            OutlineTable::Glyf => match glyf::record(&face, glyph_id) {
                None => Replay::Aborted,
                Some(record) if glyf::is_blank(record) => Replay::Blank,
                Some(_) => {
                    let done = face.outline_glyph(GlyphId(glyph_id), &mut adapter);
                    if done.is_some() {
                        Replay::Finished
                    } else {
                        Replay::Aborted
                    }
                }
            },
            OutlineTable::Cff => face.tables().cff.as_ref().map_or(Replay::Aborted, |cff| {
                cff_replay(cff.outline(GlyphId(glyph_id), &mut adapter))
            }),
            OutlineTable::Cff2 => face.tables().cff2.as_ref().map_or(Replay::Aborted, |cff2| {
                cff_replay(cff2.outline(
                    face.variation_coordinates(),
                    GlyphId(glyph_id),
                    &mut adapter,
                ))
            }),
            OutlineTable::Missing => Replay::Blank,
        };
        match (replay, adapter.commands) {
            (Replay::Aborted, _) => Err(FontError::MalformedOutline(glyph_id)),
            (_, 0) => Ok(OutlineStatus::Empty),
            _ => Ok(OutlineStatus::Drawn),
        }
    }
}

/// A charstring that parses but draws nothing reports `ZeroBBox`.
fn cff_replay(result: Result<ttf_parser::Rect, CFFError>) -> Replay {
    match result {
        Ok(_) => Replay::Finished,
        Err(CFFError::ZeroBBox) => Replay::Blank,
        Err(_) => Replay::Aborted,
    }
}

/// Number of faces stored in a font file (1 for plain `.ttf`/`.otf`).
#[must_use]
pub fn face_count(bytes: &[u8]) -> u32 {
    ttf_parser::fonts_in_collection(bytes).unwrap_or(1)
}

/// Adapter from [`OutlineSink`] to `ttf_parser::OutlineBuilder`.
struct OutlineAdapter<'a> {
    sink: &'a mut dyn OutlineSink,
    commands: usize,
}

impl ttf_parser::OutlineBuilder for OutlineAdapter<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands += 1;
        self.sink.move_to(f64::from(x), f64::from(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands += 1;
        self.sink.line_to(f64::from(x), f64::from(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands += 1;
        self.sink
            .quad_to(f64::from(x1), f64::from(y1), f64::from(x), f64::from(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands += 1;
        self.sink.curve_to(
            f64::from(x1),
            f64::from(y1),
            f64::from(x2),
            f64::from(y2),
            f64::from(x),
            f64::from(y),
        );
    }

    fn close(&mut self) {
        self.commands += 1;
        self.sink.close();
    }
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSource")
            .field("index", &self.index)
            .field("units_per_em", &self.units_per_em)
            .field("num_glyphs", &self.num_glyphs)
            .field("cmap_subtable", &self.cmap_subtable)
            .field("outlines", &self.outlines)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use crate::synthetic::SyntheticFont;

    #[derive(Default)]
    struct Counter {
        moves: usize,
        lines: usize,
        quads: usize,
        closes: usize,
    }

    impl OutlineSink for Counter {
        fn move_to(&mut self, _x: f64, _y: f64) {
            self.moves += 1;
        }
        fn line_to(&mut self, _x: f64, _y: f64) {
            self.lines += 1;
        }
        fn quad_to(&mut self, _: f64, _: f64, _: f64, _: f64) {
            self.quads += 1;
        }
        fn curve_to(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64) {}
        fn close(&mut self) {
            self.closes += 1;
        }
    }

    fn sample() -> FontSource {
        let bytes = SyntheticFont::new(1000)
            .rectangle('I', 0, 0, 100, 200)
            .empty('\u{20}')
            .glyph(
                'o',
                vec![vec![
                    (0, 50, true),
                    (0, 100, false),
                    (50, 100, true),
                    (100, 100, false),
                    (100, 50, true),
                    (100, 0, false),
                    (50, 0, true),
                    (0, 0, false),
                ]],
            )
            .malformed('m')
            .dangling('x', 999)
            .build();
        FontSource::from_bytes(Arc::from(bytes.into_boxed_slice()), 0).expect("parse")
    }

    #[test]
    fn opens_synthetic_font() {
        let font = sample();
        assert_eq!(font.units_per_em(), 1000);
        assert!(font.has_cmap());
        assert_eq!(font.num_glyphs(), 5, ".notdef + I + space + o + m");
    }

    #[test]
    fn glyph_lookup_uses_cmap() {
        let font = sample();
        assert_eq!(font.glyph_id('I'), Some(1));
        assert_eq!(font.glyph_id(' '), Some(2));
        assert_eq!(font.glyph_id('Z'), None, "unmapped character");
    }

    #[test]
    fn rectangle_outline_is_drawn() {
        let font = sample();
        let gid = font.glyph_id('I').expect("I");
        let mut counter = Counter::default();
        let status = font.outline(gid, &mut counter).expect("outline");
        assert_eq!(status, OutlineStatus::Drawn);
        assert_eq!(counter.moves, 1);
        assert!(counter.lines >= 3, "lines: {}", counter.lines);
        assert_eq!(counter.closes, 1);
    }

    #[test]
    fn quadratic_outline_reports_quads() {
        let font = sample();
        let gid = font.glyph_id('o').expect("o");
        let mut counter = Counter::default();
        font.outline(gid, &mut counter).expect("outline");
        assert_eq!(counter.quads, 4);
    }

    #[test]
    fn space_is_empty_not_an_error() {
        let font = sample();
        let gid = font.glyph_id(' ').expect("space");
        let mut counter = Counter::default();
        let status = font.outline(gid, &mut counter).expect("outline");
        assert!(status.is_empty());
        assert!(font.precomputed_bounds(gid).is_none());
    }

    #[test]
    fn precomputed_bounds_match_rectangle() {
        let font = sample();
        let gid = font.glyph_id('I').expect("I");
        let rect = font.precomputed_bounds(gid).expect("bounds");
        assert_eq!(
            rect,
            GlyphRect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 100.0,
                y_max: 200.0
            }
        );
    }

    #[test]
    fn unparsable_glyph_is_malformed_not_empty() {
        let font = sample();
        let gid = font.glyph_id('m').expect("m is mapped");
        let mut counter = Counter::default();
        let err = font.outline(gid, &mut counter).expect_err("corrupt record");
        assert!(matches!(err, FontError::MalformedOutline(g) if g == gid), "{err}");
        assert_eq!(counter.moves + counter.lines + counter.closes, 0);
    }

    #[test]
    fn precomputed_bounds_come_from_the_record_header() {
        let font = sample();
        let gid = font.glyph_id('m').expect("m is mapped");
        // The outline of this glyph cannot be replayed, so the box can only
        // have been read from the stored header.
        let rect = font.precomputed_bounds(gid).expect("stored box");
        assert_eq!(
            rect,
            GlyphRect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 100.0,
                y_max: 100.0
            }
        );
        assert!(font.precomputed_bounds(999).is_none());
    }

    #[test]
    fn dangling_mapping_is_a_traversal_error() {
        let font = sample();
        let gid = font.glyph_id('x').expect("x is mapped");
        let mut counter = Counter::default();
        let err = font.outline(gid, &mut counter).expect_err("out of range");
        assert!(matches!(err, FontError::GlyphOutOfRange { glyph_id: 999, .. }));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = FontSource::from_bytes(Arc::from(&b"not a font"[..]), 0).expect_err("garbage");
        assert!(matches!(err, FontError::ParseError(_)), "{err}");
    }

    #[test]
    fn face_index_past_end_is_rejected() {
        let bytes = SyntheticFont::new(1000).rectangle('I', 0, 0, 1, 1).build();
        let err =
            FontSource::from_bytes(Arc::from(bytes.into_boxed_slice()), 3).expect_err("index");
        assert!(matches!(err, FontError::FaceIndex { index: 3, count: 1 }));
    }
}
