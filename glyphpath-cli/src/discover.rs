//! Font file discovery.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

/// Extensions of font files we open, compared case-insensitively.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// All font files under `dir`, recursively, in sorted order.
///
/// Directories that cannot be read are logged and skipped. Symbolic links
/// to directories are not descended into; links to font files are kept.
pub fn discover_fonts(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(dir, &mut found);
    found.sort();
    found
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!("cannot read font directory {}: {e}", dir.display());
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            walk(&path, found);
        } else if file_type.is_symlink() {
            if path.is_file() && is_font_file(&path) {
                found.push(path);
            }
        } else if is_font_file(&path) {
            found.push(path);
        }
    }
}

pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|f| ext.eq_ignore_ascii_case(f)))
}

/// Output name of face `index` of the font at `path`: the file stem, with
/// `-<index>` appended for every face after the first of a collection.
pub fn face_name(path: &Path, index: u32) -> String {
    let stem = path
        .file_stem()
        .map_or_else(|| "font".to_owned(), |s| s.to_string_lossy().into_owned());
    if index == 0 {
        stem
    } else {
        format!("{stem}-{index}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_font_extensions() {
        assert!(is_font_file(Path::new("a/Serif.ttf")));
        assert!(is_font_file(Path::new("Serif.OTF")));
        assert!(is_font_file(Path::new("Collection.TtC")));
        assert!(!is_font_file(Path::new("Serif.woff2")));
        assert!(!is_font_file(Path::new("ttf")));
    }

    #[test]
    fn collection_faces_get_numbered_names() {
        let path = Path::new("fonts/cjk/Song.ttc");
        assert_eq!(face_name(path, 0), "Song");
        assert_eq!(face_name(path, 2), "Song-2");
    }

    #[test]
    fn missing_directory_yields_nothing() {
        assert!(discover_fonts(Path::new("/nonexistent/fonts")).is_empty());
    }

    #[cfg(unix)]
    #[test]
    #[expect(clippy::expect_used, reason = "tests may panic")]
    fn directory_link_cycles_are_not_followed() {
        use std::os::unix::fs::symlink;

        let root = std::env::temp_dir().join(format!(
            "glyphpath_discover_cycle_{}",
            std::process::id()
        ));
        let sub = root.join("sub");
        fs::create_dir_all(&sub).expect("create dirs");
        fs::write(sub.join("A.ttf"), b"").expect("write font");
        symlink(&root, sub.join("loop")).expect("link back to root");
        symlink(sub.join("A.ttf"), root.join("Alias.ttf")).expect("link to font");

        let found = discover_fonts(&root);
        let _ = fs::remove_dir_all(&root);
        assert_eq!(found, vec![root.join("Alias.ttf"), sub.join("A.ttf")]);
    }
}
