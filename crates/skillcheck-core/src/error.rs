//! # Error Types
//!
//! Errors are reserved for conditions that stop a run before or while the
//! collection is read. Contract violations inside documents are never
//! errors; they are reported as [`crate::Issue`]s.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for skillcheck.
#[derive(Error, Debug)]
pub enum SkillcheckError {
    /// The master index document does not exist. Fatal at setup time and
    /// reported with its own exit status by the CLI.
    #[error("missing {}", path.display())]
    IndexMissing {
        /// Expected location of the index document.
        path: PathBuf,
    },

    /// A file or directory in the collection could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be loaded or is invalid.
    #[error("invalid config {}: {reason}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Reason the configuration was rejected.
        reason: String,
    },
}

impl SkillcheckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_missing_display_names_path() {
        let err = SkillcheckError::IndexMissing {
            path: PathBuf::from("agents/skills/skills_index.md"),
        };
        assert_eq!(err.to_string(), "missing agents/skills/skills_index.md");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = SkillcheckError::io(
            "a/SKILL.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("a/SKILL.md"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_error_display() {
        let err = SkillcheckError::Config {
            path: PathBuf::from("skillcheck.yaml"),
            reason: "unknown field".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config skillcheck.yaml: unknown field"
        );
    }
}
