//! # Issues
//!
//! An [`Issue`] is one structural-contract violation. Issues are only ever
//! appended to a report; they are not deduplicated or rewritten.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single contract violation located at a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// File the violation belongs to. For a missing file this is the path
    /// where the file was expected.
    pub path: PathBuf,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The issue location relative to `root`, or the raw path when it does
    /// not live under `root`.
    pub fn display_path(&self, root: &Path) -> PathBuf {
        self.path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| self.path.clone())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}
