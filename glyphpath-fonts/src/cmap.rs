//! Best codepoint-to-glyph table selection.
//!
//! A font may carry several `cmap` subtables. We pick one Unicode-capable
//! subtable per face, ranked by how complete it is expected to be, and use
//! it for every lookup.

use ttf_parser::PlatformId;
use ttf_parser::cmap::Subtables;

/// `(platform, encoding)` pairs from most to least preferred.
///
/// Full-repertoire tables come first, BMP-only ones after.
const PREFERENCES: &[(PlatformId, u16)] = &[
    (PlatformId::Windows, 10),
    (PlatformId::Unicode, 6),
    (PlatformId::Unicode, 4),
    (PlatformId::Windows, 1),
    (PlatformId::Unicode, 3),
    (PlatformId::Unicode, 2),
    (PlatformId::Unicode, 1),
    (PlatformId::Unicode, 0),
];

/// Preference rank of a subtable; lower is better. `None` for subtables we
/// never use (symbol, Macintosh roman, variation sequences, ...).
#[must_use]
pub fn rank(platform: PlatformId, encoding: u16) -> Option<usize> {
    PREFERENCES
        .iter()
        .position(|&(p, e)| p == platform && e == encoding)
}

/// Index of the best subtable, if the font has any usable one.
#[must_use]
pub fn best_subtable(subtables: Subtables<'_>) -> Option<u16> {
    let mut best: Option<(usize, u16)> = None;
    for (index, subtable) in (0u16..).zip(subtables) {
        let Some(r) = rank(subtable.platform_id, subtable.encoding_id) else {
            continue;
        };
        if best.is_none_or(|(current, _)| r < current) {
            best = Some((r, index));
        }
    }
    best.map(|(_, index)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_repertoire_beats_bmp() {
        assert!(rank(PlatformId::Windows, 10) < rank(PlatformId::Windows, 1));
        assert!(rank(PlatformId::Unicode, 4) < rank(PlatformId::Unicode, 3));
    }

    #[test]
    fn symbol_and_mac_tables_are_ignored() {
        assert_eq!(rank(PlatformId::Windows, 0), None);
        assert_eq!(rank(PlatformId::Macintosh, 0), None);
        assert_eq!(rank(PlatformId::Unicode, 5), None);
    }
}
