use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures surfaced by indexing and wildcard translation.
///
/// Empty or blank queries are not errors; they produce empty results before
/// ever reaching the index.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A file could not be opened or read as text.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root passed to a directory scan does not exist or cannot be
    /// listed. Unlike per-file failures, this one propagates to the caller.
    #[error("search root {path} is not accessible: {source}")]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A wildcard pattern did not compile to a valid matcher.
    #[error("invalid wildcard pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl EngineError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn root(path: &Path, source: std::io::Error) -> Self {
        EngineError::RootInaccessible {
            path: path.to_path_buf(),
            source,
        }
    }
}
