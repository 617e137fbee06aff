//! Minimal SVG envelope around one canonical path.

use svg::Document;
use svg::node::element::Path;

use crate::canonical::CanonicalPath;

/// XML declaration written ahead of every document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// The only fill a glyph document carries.
pub const FILL: &str = "black";

/// A glyph as a vector document: integer canvas size plus one path.
///
/// The document is a data artifact: a `viewBox` of `0 0 width height`,
/// matching pixel `width`/`height`, and a single solid-filled `<path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorDocument {
    pub width: u32,
    pub height: u32,
    pub path_data: CanonicalPath,
}

impl VectorDocument {
    #[must_use]
    pub const fn new(width: u32, height: u32, path_data: CanonicalPath) -> Self {
        Self {
            width,
            height,
            path_data,
        }
    }

    /// Build the SVG element tree.
    #[must_use]
    pub fn to_svg(&self) -> Document {
        let path = Path::new()
            .set("d", self.path_data.as_str())
            .set("fill", FILL);
        Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set("width", self.width.to_string())
            .set("height", self.height.to_string())
            .add(path)
    }

    /// Serialize as UTF-8 text: XML declaration, then the `<svg>` root.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        format!("{XML_DECLARATION}\n{}\n", self.to_svg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;

    #[test]
    fn document_carries_size_and_path() {
        let doc = VectorDocument::new(512, 1024, canonicalize("M0,1024L512,1024Z"));
        let s = doc.to_svg_string();
        assert!(s.starts_with(XML_DECLARATION), "missing declaration: {s}");
        assert!(s.contains("<svg"), "missing root: {s}");
        assert!(s.contains(r#"viewBox="0 0 512 1024""#), "viewBox: {s}");
        assert!(s.contains(r#"width="512""#), "width: {s}");
        assert!(s.contains(r#"height="1024""#), "height: {s}");
        assert!(s.contains(r#"d="M0 1024 L512 1024 Z""#), "d: {s}");
        assert!(s.contains(r#"fill="black""#), "fill: {s}");
        assert!(
            s.contains(r#"xmlns="http://www.w3.org/2000/svg""#),
            "xmlns: {s}"
        );
    }

    #[test]
    fn exactly_one_path_element() {
        let doc = VectorDocument::new(1024, 1024, canonicalize("M0,0"));
        let s = doc.to_svg_string();
        assert_eq!(s.matches("<path").count(), 1, "{s}");
        assert!(s.contains(r#"d="M0 0""#), "{s}");
        assert!(!s.contains("stroke"), "no styling beyond fill: {s}");
    }
}
