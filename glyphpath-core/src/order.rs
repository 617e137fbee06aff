//! Character ordering lists.
//!
//! An ordering is a JSON object whose keys, in document order, are the
//! characters to export; values are ignored:
//!
//! ```json
//! {"A": 0, "B": 1, "永": 2}
//! ```

use std::path::Path;

use log::warn;
use serde_json::Value;

use crate::error::{ErrorKind, PipelineError, PipelineResult};

/// Parse an ordering from JSON text.
///
/// Keys that are not exactly one character are skipped with a warning.
///
/// # Errors
///
/// Returns [`ErrorKind::Config`] if the text is not a JSON object.
pub fn parse_order(json: &str) -> PipelineResult<Vec<char>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| PipelineError::new(ErrorKind::Config, format!("character order: {e}")))?;
    let Value::Object(map) = value else {
        return Err(PipelineError::new(
            ErrorKind::Config,
            "character order must be a JSON object",
        ));
    };
    let mut chars = Vec::with_capacity(map.len());
    for key in map.keys() {
        let mut it = key.chars();
        match (it.next(), it.next()) {
            (Some(ch), None) => chars.push(ch),
            _ => warn!("character order: skipping key {key:?}, not a single character"),
        }
    }
    Ok(chars)
}

/// Read and parse an ordering file.
///
/// # Errors
///
/// Returns [`ErrorKind::Io`] if the file cannot be read, otherwise as
/// [`parse_order`].
pub fn load_order(path: &Path) -> PipelineResult<Vec<char>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        PipelineError::new(ErrorKind::Io, format!("{}: {e}", path.display()))
    })?;
    parse_order(&text)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;

    #[test]
    fn keys_keep_document_order() {
        let chars = parse_order(r#"{"z": 0, "a": 1, "永": 2, " ": 3}"#).expect("valid");
        assert_eq!(chars, vec!['z', 'a', '永', ' ']);
    }

    #[test]
    fn values_are_ignored() {
        let chars = parse_order(r#"{"B": null, "A": {"nested": [1, 2]}}"#).expect("valid");
        assert_eq!(chars, vec!['B', 'A']);
    }

    #[test]
    fn multi_character_keys_are_skipped() {
        let chars = parse_order(r#"{"AB": 0, "": 1, "C": 2}"#).expect("valid");
        assert_eq!(chars, vec!['C']);
    }

    #[test]
    fn non_objects_are_rejected() {
        for bad in ["[\"A\"]", "\"A\"", "{", ""] {
            let err = parse_order(bad).expect_err("should fail");
            assert_eq!(err.kind, ErrorKind::Config, "input {bad:?}");
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_order(Path::new("/nonexistent/order.json")).expect_err("no file");
        assert_eq!(err.kind, ErrorKind::Io);
    }
}
