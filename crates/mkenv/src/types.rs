//! Shared type definitions for the mkenv crate.

use std::path::{Path, PathBuf};

/// The finished result of a scan: everything the document renderer needs.
///
/// `dependencies` holds canonical package names, lexicographically sorted and
/// deduplicated after canonicalization. Skip-mapped names never appear here,
/// and no entry retains a dotted sub-path fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSpec {
    /// Name of the environment to create
    pub env_name: String,
    /// Interpreter version to pin (e.g. "3.8")
    pub python_version: String,
    /// Sorted canonical package names
    pub dependencies: Vec<String>,
}

/// Why a single file contributed nothing to the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The source text is not valid Python
    Parse,
    /// The file could not be opened or decoded
    Unreadable,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse => write!(f, "parse error"),
            Self::Unreadable => write!(f, "unreadable"),
        }
    }
}

/// Diagnostic record for one file that was skipped during aggregation.
///
/// Skipping is always recoverable: the rest of the tree is still analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
    pub message: String,
}

impl FileFailure {
    pub fn new(kind: FailureKind, path: &Path, error: &impl std::fmt::Display) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for FileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "skipping {} ({}): {}",
            self.path.display(),
            self.kind,
            self.message
        )
    }
}
