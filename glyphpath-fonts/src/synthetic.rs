//! Minimal in-memory TrueType fonts.
//!
//! Builds just enough of an `sfnt` (`cmap` format 12, `glyf`/`loca`,
//! `head`, `hhea`, `hmtx`, `maxp`) for `ttf-parser` to open it, so tests
//! can exercise real font parsing without binary fixtures.

/// One outline point in design units: `(x, y, on_curve)`.
pub type SyntheticPoint = (i16, i16, bool);

struct Glyph {
    contours: Vec<Vec<SyntheticPoint>>,
    /// Verbatim `glyf` record, bypassing the encoder.
    raw: Option<Vec<u8>>,
}

/// Builder for a single-face TrueType font.
///
/// Glyph 0 is always an empty `.notdef`; every added glyph takes the next
/// id in insertion order.
pub struct SyntheticFont {
    units_per_em: u16,
    glyphs: Vec<Glyph>,
    mappings: Vec<(char, u16)>,
}

impl SyntheticFont {
    /// Start a font with the given units per em (16..=16384).
    #[must_use]
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            glyphs: vec![Glyph {
                contours: Vec::new(),
                raw: None,
            }],
            mappings: Vec::new(),
        }
    }

    /// Add a glyph for `ch` made of the given contours.
    #[must_use]
    pub fn glyph(mut self, ch: char, contours: Vec<Vec<SyntheticPoint>>) -> Self {
        let id = u16::try_from(self.glyphs.len()).unwrap_or(u16::MAX);
        self.glyphs.push(Glyph {
            contours,
            raw: None,
        });
        self.mappings.push((ch, id));
        self
    }

    /// Add a glyph for `ch` whose record has a sane bounding box
    /// `(0, 0, 100, 100)` but claims 32767 contours and then ends, so its
    /// outline cannot be parsed.
    #[must_use]
    pub fn malformed(mut self, ch: char) -> Self {
        let id = u16::try_from(self.glyphs.len()).unwrap_or(u16::MAX);
        let mut raw = i16::MAX.to_be_bytes().to_vec();
        for v in [0i16, 0, 100, 100] {
            raw.extend_from_slice(&v.to_be_bytes());
        }
        self.glyphs.push(Glyph {
            contours: Vec::new(),
            raw: Some(raw),
        });
        self.mappings.push((ch, id));
        self
    }

    /// Add an axis-aligned rectangle glyph with corners `(x0, y0)`, `(x1, y1)`.
    #[must_use]
    pub fn rectangle(self, ch: char, x0: i16, y0: i16, x1: i16, y1: i16) -> Self {
        self.glyph(
            ch,
            vec![vec![
                (x0, y0, true),
                (x1, y0, true),
                (x1, y1, true),
                (x0, y1, true),
            ]],
        )
    }

    /// Add a glyph with no outline (like a space).
    #[must_use]
    pub fn empty(self, ch: char) -> Self {
        self.glyph(ch, Vec::new())
    }

    /// Map `ch` to a glyph id without adding a glyph, e.g. one that is out
    /// of range.
    #[must_use]
    pub fn dangling(mut self, ch: char, glyph_id: u16) -> Self {
        self.mappings.push((ch, glyph_id));
        self
    }

    /// Serialize the font.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let num_glyphs = u16::try_from(self.glyphs.len()).unwrap_or(u16::MAX);

        let mut glyf = Vec::new();
        let mut loca = Vec::new();
        let mut bbox = (i16::MAX, i16::MAX, i16::MIN, i16::MIN);
        for glyph in &self.glyphs {
            push_u32(&mut loca, len_u32(&glyf));
            if let Some(b) = encode_glyph(glyph, &mut glyf) {
                bbox = (
                    bbox.0.min(b.0),
                    bbox.1.min(b.1),
                    bbox.2.max(b.2),
                    bbox.3.max(b.3),
                );
            }
        }
        push_u32(&mut loca, len_u32(&glyf));
        if bbox.0 > bbox.2 {
            bbox = (0, 0, 0, 0);
        }

        let mut head = vec![0u8; 54];
        head[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
        head[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
        head[18..20].copy_from_slice(&self.units_per_em.to_be_bytes());
        head[36..38].copy_from_slice(&bbox.0.to_be_bytes());
        head[38..40].copy_from_slice(&bbox.1.to_be_bytes());
        head[40..42].copy_from_slice(&bbox.2.to_be_bytes());
        head[42..44].copy_from_slice(&bbox.3.to_be_bytes());
        // long loca offsets
        head[50..52].copy_from_slice(&1i16.to_be_bytes());

        let mut hhea = vec![0u8; 36];
        hhea[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
        hhea[4..6].copy_from_slice(&bbox.3.to_be_bytes());
        hhea[6..8].copy_from_slice(&bbox.1.to_be_bytes());
        hhea[34..36].copy_from_slice(&num_glyphs.to_be_bytes());

        let mut hmtx = Vec::with_capacity(usize::from(num_glyphs) * 4);
        for _ in 0..num_glyphs {
            hmtx.extend_from_slice(&self.units_per_em.to_be_bytes());
            hmtx.extend_from_slice(&0i16.to_be_bytes());
        }

        let mut maxp = Vec::with_capacity(6);
        push_u32(&mut maxp, 0x0000_5000);
        maxp.extend_from_slice(&num_glyphs.to_be_bytes());

        // Tags must be sorted: lookups binary-search the table records.
        let tables: [(&[u8; 4], Vec<u8>); 7] = [
            (b"cmap", self.encode_cmap()),
            (b"glyf", glyf),
            (b"head", head),
            (b"hhea", hhea),
            (b"hmtx", hmtx),
            (b"loca", loca),
            (b"maxp", maxp),
        ];
        assemble(&tables)
    }

    /// A single Windows/UCS-4 subtable in format 12, one group per char.
    fn encode_cmap(&self) -> Vec<u8> {
        let mut mappings = self.mappings.clone();
        mappings.sort_by_key(|&(ch, _)| ch);
        mappings.dedup_by_key(|&mut (ch, _)| ch);

        let groups = u32::try_from(mappings.len()).unwrap_or(u32::MAX);
        let mut cmap = Vec::new();
        cmap.extend_from_slice(&0u16.to_be_bytes()); // version
        cmap.extend_from_slice(&1u16.to_be_bytes()); // numTables
        cmap.extend_from_slice(&3u16.to_be_bytes()); // platform: Windows
        cmap.extend_from_slice(&10u16.to_be_bytes()); // encoding: UCS-4
        push_u32(&mut cmap, 12);
        cmap.extend_from_slice(&12u16.to_be_bytes()); // format
        cmap.extend_from_slice(&0u16.to_be_bytes()); // reserved
        push_u32(&mut cmap, 16 + 12 * groups);
        push_u32(&mut cmap, 0); // language
        push_u32(&mut cmap, groups);
        for (ch, gid) in mappings {
            push_u32(&mut cmap, u32::from(ch));
            push_u32(&mut cmap, u32::from(ch));
            push_u32(&mut cmap, u32::from(gid));
        }
        cmap
    }
}

/// Append a simple glyph record; returns its bounding box, or `None` for
/// an empty glyph (which occupies zero bytes in `glyf`) and for raw records.
fn encode_glyph(glyph: &Glyph, out: &mut Vec<u8>) -> Option<(i16, i16, i16, i16)> {
    if let Some(raw) = &glyph.raw {
        out.extend_from_slice(raw);
        return None;
    }
    let points: Vec<SyntheticPoint> = glyph.contours.iter().flatten().copied().collect();
    if points.is_empty() {
        return None;
    }
    let x_min = points.iter().map(|p| p.0).min()?;
    let y_min = points.iter().map(|p| p.1).min()?;
    let x_max = points.iter().map(|p| p.0).max()?;
    let y_max = points.iter().map(|p| p.1).max()?;

    let contours = i16::try_from(glyph.contours.len()).unwrap_or(i16::MAX);
    out.extend_from_slice(&contours.to_be_bytes());
    for v in [x_min, y_min, x_max, y_max] {
        out.extend_from_slice(&v.to_be_bytes());
    }
    let mut end = 0usize;
    for contour in &glyph.contours {
        end += contour.len();
        let last = u16::try_from(end.saturating_sub(1)).unwrap_or(u16::MAX);
        out.extend_from_slice(&last.to_be_bytes());
    }
    out.extend_from_slice(&0u16.to_be_bytes()); // instructionLength
    for &(_, _, on_curve) in &points {
        out.push(u8::from(on_curve));
    }
    // Coordinates are deltas from the previous point, stored as full i16.
    let mut prev = 0i16;
    for &(x, _, _) in &points {
        out.extend_from_slice(&x.wrapping_sub(prev).to_be_bytes());
        prev = x;
    }
    prev = 0;
    for &(_, y, _) in &points {
        out.extend_from_slice(&y.wrapping_sub(prev).to_be_bytes());
        prev = y;
    }
    Some((x_min, y_min, x_max, y_max))
}

/// Lay out the table directory followed by the table data.
fn assemble(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let count = u16::try_from(tables.len()).unwrap_or(u16::MAX);
    let mut data = Vec::new();
    push_u32(&mut data, 0x0001_0000); // sfnt version
    data.extend_from_slice(&count.to_be_bytes());
    data.extend_from_slice(&[0; 6]); // searchRange, entrySelector, rangeShift

    let mut offset = 12 + 16 * tables.len();
    for (tag, table) in tables {
        data.extend_from_slice(&tag[..]);
        push_u32(&mut data, 0); // checksum
        push_u32(&mut data, u32::try_from(offset).unwrap_or(u32::MAX));
        push_u32(&mut data, len_u32(table));
        offset += table.len();
    }
    for (_, table) in tables {
        data.extend_from_slice(table);
    }
    data
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn len_u32(bytes: &[u8]) -> u32 {
    u32::try_from(bytes.len()).unwrap_or(u32::MAX)
}
