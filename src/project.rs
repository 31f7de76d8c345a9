//! Filesystem operations scoped to the generated project's root.
//!
//! All paths are resolved against an absolute root captured once after the
//! bootstrap step, never against the process working directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

#[derive(Debug)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    /// Resolve `<base>/<name>` to an absolute path. The directory must
    /// already exist (the bootstrap tool creates it).
    pub fn resolve(base: &Path, name: &str) -> Result<Self, ScaffoldError> {
        let path = base.join(name);
        let root = fs::canonicalize(&path).map_err(|e| ScaffoldError::fs(&path, e))?;
        Ok(Self { root })
    }

    /// Wrap an existing directory without canonicalizing. Test helper.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write `contents` to `rel`, fully replacing any prior file.
    pub fn write(&self, rel: &str, contents: &str) -> Result<(), ScaffoldError> {
        let path = self.root.join(rel);
        fs::write(&path, contents).map_err(|e| ScaffoldError::fs(path, e))
    }

    pub fn mkdir(&self, rel: &str) -> Result<(), ScaffoldError> {
        let path = self.root.join(rel);
        fs::create_dir_all(&path).map_err(|e| ScaffoldError::fs(path, e))
    }

    /// Best-effort delete: a file that is already absent is not an error.
    pub fn remove_if_present(&self, rel: &str) -> Result<bool, ScaffoldError> {
        let path = self.root.join(rel);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ScaffoldError::fs(path, e)),
        }
    }
}
