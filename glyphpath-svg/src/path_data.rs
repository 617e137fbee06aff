//! Outline program → raw SVG path data.
//!
//! The raw text keeps full `f64` precision; [`crate::canonical`] rounds and
//! re-spaces it afterwards.

use std::fmt::Write;

use kurbo::{BezPath, PathEl, Point};

/// Path emitted for a glyph with no outline, so every document still
/// contains a (possibly invisible) drawable path.
pub const FALLBACK_PATH: &str = "M0,0";

/// SVG letter for a command.
#[must_use]
pub const fn command_letter(el: &PathEl) -> char {
    match el {
        PathEl::MoveTo(_) => 'M',
        PathEl::LineTo(_) => 'L',
        PathEl::QuadTo(..) => 'Q',
        PathEl::CurveTo(..) => 'C',
        PathEl::ClosePath => 'Z',
    }
}

/// Convert an outline program to an SVG path data string.
///
/// Each command becomes its absolute letter (`M`, `L`, `Q`, `C`, `Z`)
/// followed by its points as `x,y` pairs, in encounter order. An empty
/// program renders as [`FALLBACK_PATH`].
#[must_use]
pub fn render_path_data(program: &BezPath) -> String {
    let elements = program.elements();
    if elements.is_empty() {
        return FALLBACK_PATH.to_owned();
    }

    let mut d = String::with_capacity(elements.len() * 24);
    for el in elements {
        d.push(command_letter(el));
        match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => write_point(&mut d, p),
            PathEl::QuadTo(p1, p2) => {
                write_point(&mut d, p1);
                d.push(' ');
                write_point(&mut d, p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                write_point(&mut d, p1);
                d.push(' ');
                write_point(&mut d, p2);
                d.push(' ');
                write_point(&mut d, p3);
            }
            PathEl::ClosePath => {}
        }
    }
    d
}

/// Write "x,y" to the string.
///
/// Normalizes negative zero to positive zero for cleaner output.
fn write_point(d: &mut String, p: Point) {
    let x = if p.x == 0.0 { 0.0 } else { p.x };
    let y = if p.y == 0.0 { 0.0 } else { p.y };
    let _ = write!(d, "{x},{y}");
}
