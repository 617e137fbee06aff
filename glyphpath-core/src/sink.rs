//! Artifact output abstraction.
//!
//! The pipeline produces file contents but never touches the filesystem
//! itself. Implementations decide where bytes end up:
//! - `DirectorySink` in the CLI crate (writes under an output directory)
//! - [`MemorySink`] for tests

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// A destination for per-character artifacts.
pub trait ArtifactSink {
    /// Store `contents` under `relative`, a path relative to the output
    /// root (see [`crate::naming::artifact_path`]). Existing content at the
    /// same path is replaced.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the artifact cannot be stored.
    fn write(&mut self, relative: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Keeps every artifact in memory, ordered by path.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents stored at `relative`, if any.
    #[must_use]
    pub fn get(&self, relative: &Path) -> Option<&[u8]> {
        self.files.get(relative).map(Vec::as_slice)
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, relative: &Path, contents: &[u8]) -> io::Result<()> {
        self.files.insert(relative.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
