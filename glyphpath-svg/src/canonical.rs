//! Canonical path text.
//!
//! Raw path data is made compact and uniform in two passes:
//!
//! 1. every numeric token (integer, decimal or exponent form) is replaced
//!    by the nearest integer, ties rounding away from zero;
//! 2. separators are normalized: each command letter is preceded by one
//!    space (unless it starts the string) and directly followed by its
//!    first operand, operands are separated by one space, and commas are
//!    treated as whitespace.
//!
//! The result matches `(Letter Number*)+` with single spaces and is a fixed
//! point of [`canonicalize`].

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Command letters of the SVG path grammar, both cases.
pub const COMMAND_LETTERS: &str = "MLHVCSQTAZmlhvcsqtaz";

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

#[expect(clippy::expect_used, reason = "pattern is a constant")]
fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| {
        Regex::new(r"-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?").expect("valid regex")
    })
}

/// Whether `ch` is a path command letter.
#[must_use]
pub fn is_command_letter(ch: char) -> bool {
    COMMAND_LETTERS.contains(ch)
}

/// Replace every numeric token with its nearest integer.
///
/// Ties round away from zero (`0.5 → 1`, `-2.5 → -3`); `-0.4` becomes `0`.
#[must_use]
pub fn round_numbers(d: &str) -> Cow<'_, str> {
    number_re().replace_all(d, |caps: &Captures<'_>| {
        let token = &caps[0];
        token
            .parse::<f64>()
            .map_or_else(|_| token.to_owned(), |v| round_to_integer(v).to_string())
    })
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating conversion; path coordinates are far below i64::MAX"
)]
fn round_to_integer(v: f64) -> i64 {
    v.round() as i64
}

/// Normalize separators around command letters and operands.
#[must_use]
pub fn space_commands(d: &str) -> String {
    let mut out = String::with_capacity(d.len() + d.len() / 4);
    let mut separated = false;
    for ch in d.chars() {
        if ch.is_whitespace() || ch == ',' {
            separated = true;
            continue;
        }
        if is_command_letter(ch) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push(ch);
        } else {
            let after_letter = out.chars().next_back().is_some_and(is_command_letter);
            if separated && !out.is_empty() && !after_letter {
                out.push(' ');
            }
            out.push(ch);
        }
        separated = false;
    }
    out
}

/// Round, then space-normalize raw path data.
#[must_use]
pub fn canonicalize(d: &str) -> CanonicalPath {
    CanonicalPath(space_commands(&round_numbers(d)))
}

/// Path data in canonical form. Only produced by [`canonicalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
