//! Creating the consolidation directory under the root.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::FlattenError;

use super::helpers::io_error_with_help;

/// Whether `ensure_target` had to create the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Created,
    Existing,
}

/// Make sure `root/name` exists as a directory and return its path.
pub fn ensure_target(root: &Path, name: &str) -> Result<(PathBuf, TargetStatus)> {
    let target = root.join(name);

    match fs::symlink_metadata(&target) {
        Ok(meta) if meta.is_dir() => return Ok((target, TargetStatus::Existing)),
        // A symlink counts when it points at a directory.
        Ok(meta) if meta.file_type().is_symlink() && target.is_dir() => {
            return Ok((target, TargetStatus::Existing));
        }
        Ok(_) => return Err(FlattenError::TargetNotDirectory(target).into()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_error_with_help("inspect target directory", &target)(e)),
    }

    fs::create_dir_all(&target).map_err(io_error_with_help("create target directory", &target))?;
    info!(target = %target.display(), "Created target directory");
    Ok((target, TargetStatus::Created))
}
