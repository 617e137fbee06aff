//! Plain geometric values reported by a font.

/// A glyph's bounding rectangle in design units, as stored by the font.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphRect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl From<ttf_parser::Rect> for GlyphRect {
    fn from(r: ttf_parser::Rect) -> Self {
        Self {
            x_min: f64::from(r.x_min),
            y_min: f64::from(r.y_min),
            x_max: f64::from(r.x_max),
            y_max: f64::from(r.y_max),
        }
    }
}
