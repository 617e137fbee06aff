//! Raw `glyf`/`loca` access.
//!
//! `ttf-parser` answers `None` both for a glyph without contours and for
//! a glyph whose record cannot be parsed. Reading the record ourselves
//! tells the two apart.

use ttf_parser::head::IndexToLocationFormat;
use ttf_parser::{Face, Tag};

const LOCA: Tag = Tag::from_bytes(b"loca");
const GLYF: Tag = Tag::from_bytes(b"glyf");

/// Length of the fixed `glyf` record header: contour count plus bbox.
const HEADER_LEN: usize = 10;

fn read_u16(data: &[u8], at: usize) -> Option<u16> {
    data.get(at..at + 2)?.try_into().ok().map(u16::from_be_bytes)
}

fn read_i16(data: &[u8], at: usize) -> Option<i16> {
    data.get(at..at + 2)?.try_into().ok().map(i16::from_be_bytes)
}

fn read_u32(data: &[u8], at: usize) -> Option<u32> {
    data.get(at..at + 4)?.try_into().ok().map(u32::from_be_bytes)
}

/// The `glyf` record of a glyph, possibly empty.
///
/// `None` if the face has no `glyf` outlines or `loca` does not describe a
/// valid range for `glyph_id`.
pub(crate) fn record<'a>(face: &Face<'a>, glyph_id: u16) -> Option<&'a [u8]> {
    let raw = face.raw_face();
    let loca = raw.table(LOCA)?;
    let glyf = raw.table(GLYF)?;
    let i = usize::from(glyph_id);
    let (start, end) = match face.tables().head.index_to_location_format {
        IndexToLocationFormat::Short => (
            usize::from(read_u16(loca, i * 2)?) * 2,
            usize::from(read_u16(loca, i * 2 + 2)?) * 2,
        ),
        IndexToLocationFormat::Long => (
            usize::try_from(read_u32(loca, i * 4)?).ok()?,
            usize::try_from(read_u32(loca, i * 4 + 4)?).ok()?,
        ),
    };
    glyf.get(start..end)
}

/// Whether a record stands for a glyph without geometry: zero bytes, or a
/// header declaring zero contours.
pub(crate) fn is_blank(record: &[u8]) -> bool {
    record.is_empty() || (record.len() >= HEADER_LEN && read_u16(record, 0) == Some(0))
}

/// Bounding box stored in the record header, if well-formed.
pub(crate) fn stored_bounds(record: &[u8]) -> Option<ttf_parser::Rect> {
    if is_blank(record) {
        return None;
    }
    let rect = ttf_parser::Rect {
        x_min: read_i16(record, 2)?,
        y_min: read_i16(record, 4)?,
        x_max: read_i16(record, 6)?,
        y_max: read_i16(record, 8)?,
    };
    (rect.x_min <= rect.x_max && rect.y_min <= rect.y_max).then_some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(contours: i16, bbox: [i16; 4]) -> Vec<u8> {
        let mut out = contours.to_be_bytes().to_vec();
        for v in bbox {
            out.extend_from_slice(&v.to_be_bytes());
        }
        out
    }

    #[test]
    fn blank_records() {
        assert!(is_blank(&[]));
        assert!(is_blank(&header(0, [0, 0, 0, 0])));
        assert!(!is_blank(&header(1, [0, 0, 10, 10])));
        assert!(!is_blank(&[0, 0, 1]), "truncated header is not blank");
    }

    #[test]
    fn stored_bounds_read_signed_fields() {
        let rect = stored_bounds(&header(2, [-12, -300, 500, 700]))
            .map(|r| (r.x_min, r.y_min, r.x_max, r.y_max));
        assert_eq!(rect, Some((-12, -300, 500, 700)));
    }

    #[test]
    fn inverted_or_truncated_bounds_are_rejected() {
        assert!(stored_bounds(&header(1, [10, 0, 0, 10])).is_none());
        assert!(stored_bounds(&header(1, [0, 0, 10, 10])[..6]).is_none());
        assert!(stored_bounds(&header(0, [0, 0, 10, 10])).is_none());
    }
}
