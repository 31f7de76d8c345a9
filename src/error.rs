//! Error taxonomy for the scaffold pipeline.
//!
//! Every failure is fatal: the run aborts on the first error and whatever
//! the completed steps produced stays on disk. There is no rollback.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// An invoked external command could not be spawned or exited non-zero.
    #[error("external tool failed: `{program}`: {detail}")]
    ExternalToolFailure { program: String, detail: String },

    /// A filesystem operation failed on a path the scaffolder owns.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub fn tool(program: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ExternalToolFailure {
            program: program.into(),
            detail: detail.into(),
        }
    }

    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
