//! Scoped output sink — explicit directory creation for rendered artifacts.
//!
//! Rendering and storage never create directories as a hidden side effect;
//! callers construct an [`OutputSink`] up front, which creates the target
//! directory (including parents) once, and file paths are composed through
//! it. Filesystem errors propagate unmodified as `std::io::Error`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A created output directory that hands out file paths beneath itself.
///
/// The sink is cheap to clone and carries no open handles; it only
/// guarantees that the directory existed at construction time.
#[derive(Debug, Clone)]
pub struct OutputSink {
    root: PathBuf,
}

impl OutputSink {
    /// Create `root` (with parents) if absent and return a sink scoped to it.
    ///
    /// Errors
    /// ------
    /// - Any `std::io::Error` from `create_dir_all` (permissions, a file
    ///   occupying the path, ...) is propagated unmodified.
    pub fn create(root: impl AsRef<Path>) -> io::Result<OutputSink> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(OutputSink { root })
    }

    /// The sink's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compose `<root>/<stem>.<extension>`.
    pub fn file_path(&self, stem: &str, extension: &str) -> PathBuf {
        self.root.join(format!("{stem}.{extension}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Directory creation including missing parents.
    // - Idempotent creation over an existing directory.
    // - Path composition.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `OutputSink::create` creates nested directories that do not yet exist
    // and is idempotent over an existing directory.
    //
    // Given
    // -----
    // - A temp dir and a nested `plots/run_1` path beneath it.
    //
    // Expect
    // ------
    // - Both `create` calls succeed and the directory exists on disk.
    fn create_with_missing_parents_creates_directory() {
        // Arrange
        let tmp = tempfile::tempdir().expect("temp dir");
        let nested = tmp.path().join("plots").join("run_1");

        // Act
        let sink = OutputSink::create(&nested).expect("first create should succeed");
        let again = OutputSink::create(&nested).expect("second create should succeed");

        // Assert
        assert!(nested.is_dir());
        assert_eq!(sink.root(), nested.as_path());
        assert_eq!(again.root(), nested.as_path());
    }

    #[test]
    // Purpose
    // -------
    // `file_path` joins stem and extension beneath the sink root.
    //
    // Given
    // -----
    // - A sink over a temp dir, stem "weights_overall", extension "png".
    //
    // Expect
    // ------
    // - `<root>/weights_overall.png`.
    fn file_path_composes_stem_and_extension() {
        // Arrange
        let tmp = tempfile::tempdir().expect("temp dir");
        let sink = OutputSink::create(tmp.path()).expect("create should succeed");

        // Act
        let path = sink.file_path("weights_overall", "png");

        // Assert
        assert_eq!(path, tmp.path().join("weights_overall.png"));
    }
}
