//! Resolving the root directory.
//! - Relative paths are joined onto the current directory.
//! - Existing paths are canonicalized (dunce keeps Windows paths free of `\\?\`).
//! - A missing path or a non-directory is reported before anything is created.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::errors::FlattenError;

use super::helpers::io_error_with_help;

/// Resolve `path` to an absolute directory path.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(io_error_with_help("resolve path", path))?;

    let meta = match fs::metadata(&absolute) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error!(path = %absolute.display(), "Root directory does not exist");
            return Err(FlattenError::RootNotFound(absolute).into());
        }
        Err(e) => return Err(io_error_with_help("inspect root", &absolute)(e)),
    };
    if !meta.is_dir() {
        error!(path = %absolute.display(), "Root is not a directory");
        return Err(FlattenError::RootNotDirectory(absolute).into());
    }

    let resolved = dunce::canonicalize(&absolute).map_err(io_error_with_help("canonicalize root", &absolute))?;
    debug!(input = %path.display(), root = %resolved.display(), "Resolved root directory");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn existing_directory_resolves_to_absolute() {
        let dir = assert_fs::TempDir::new().unwrap();
        let got = resolve_root(dir.path()).unwrap();
        assert!(got.is_absolute());
        assert_eq!(got, dunce::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn missing_directory_is_root_not_found() {
        let dir = assert_fs::TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = resolve_root(&missing).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FlattenError>(),
            Some(FlattenError::RootNotFound(p)) if p == &missing
        ));
    }

    #[test]
    fn regular_file_is_rejected() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file = dir.child("plain.txt");
        file.touch().unwrap();
        let err = resolve_root(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FlattenError>(),
            Some(FlattenError::RootNotDirectory(_))
        ));
    }
}
