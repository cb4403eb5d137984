//! Errors that cross the crate boundary.
//!
//! Only the entry file of an analysis (or the directory handed to the
//! registry) can fail. Collaborator files resolved along the way degrade to
//! "no contribution" and are reported through `tracing` instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to read workflow file at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JavaScript workflow file at {}: {message}", path.display())]
    UnparsableSource { path: PathBuf, message: String },
}

impl AnalysisError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn unparsable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::UnparsableSource { path: path.into(), message: message.into() }
    }

    /// The file the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::UnparsableSource { path, .. } => path,
        }
    }
}
