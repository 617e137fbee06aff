//! File-name-safe identifiers for characters.
//!
//! Producers and consumers of per-character artifacts both call
//! [`file_stem`], so they agree on names without a lookup table.

use std::path::PathBuf;

use unicode_general_category::{GeneralCategory, get_general_category};

/// Characters that are illegal in file names on at least one major
/// platform.
pub const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// `U+XXXX` label of a character, at least four upper-case hex digits.
#[must_use]
pub fn codepoint_label(ch: char) -> String {
    format!("U+{:04X}", u32::from(ch))
}

/// File name stem for a character.
///
/// Reserved characters, whitespace, and anything in a `C*` general
/// category (control, format, surrogate, private use, unassigned) become
/// their [`codepoint_label`]; every other character stands for itself.
#[must_use]
pub fn file_stem(ch: char) -> String {
    if RESERVED.contains(&ch) || ch.is_whitespace() || is_other_category(ch) {
        codepoint_label(ch)
    } else {
        ch.to_string()
    }
}

fn is_other_category(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// Path of a per-character artifact relative to the output root:
/// `<font>/<kind>/<stem>.<kind>`, e.g. `Serif/svg/A.svg`.
#[must_use]
pub fn artifact_path(font_name: &str, kind: &str, ch: char) -> PathBuf {
    let mut path = PathBuf::from(font_name);
    path.push(kind);
    path.push(format!("{}.{kind}", file_stem(ch)));
    path
}
