//! Artifact output to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glyphpath_core::ArtifactSink;

/// Writes artifacts under an output root, creating directories on demand.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn write(&mut self, relative: &Path, contents: &[u8]) -> io::Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)
    }
}
