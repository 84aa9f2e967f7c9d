//! Moving the direct entries of one candidate into the target.
//! Each entry is renamed to `target/<base name>`. An occupied destination name
//! aborts the run; there is no renaming policy and no copy fallback.

use anyhow::{Result, anyhow};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::FlattenError;
use crate::shutdown;

use super::enumerate::list_entries;
use super::helpers::io_error_with_help;

/// Result of emptying one candidate directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing to move.
    AlreadyEmpty,
    /// Number of entries moved.
    Moved(usize),
}

impl MoveOutcome {
    pub fn count(self) -> usize {
        match self {
            MoveOutcome::AlreadyEmpty => 0,
            MoveOutcome::Moved(n) => n,
        }
    }
}

/// Move every direct entry of `candidate` into `target`.
///
/// `on_moved` is called after each successful rename with the source and
/// destination paths, so callers can report progress as it happens.
pub fn move_contents<F>(candidate: &Path, target: &Path, mut on_moved: F) -> Result<MoveOutcome>
where
    F: FnMut(&Path, &Path),
{
    let entries = list_entries(candidate)?;
    if entries.is_empty() {
        debug!(candidate = %candidate.display(), "Candidate already empty");
        return Ok(MoveOutcome::AlreadyEmpty);
    }

    let mut count = 0usize;
    for src in entries {
        if shutdown::is_requested() {
            return Err(FlattenError::Interrupted.into());
        }
        let dest = move_one(&src, target)?;
        on_moved(&src, &dest);
        count += 1;
    }

    info!(candidate = %candidate.display(), count, "Moved candidate contents");
    Ok(MoveOutcome::Moved(count))
}

/// Rename a single entry into `target` under its own base name.
fn move_one(src: &Path, target: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| anyhow!("Entry has no file name: {}", src.display()))?;
    let dest = target.join(name);

    // rename(2) silently replaces an existing file, so check first.
    match fs::symlink_metadata(&dest) {
        Ok(_) => {
            return Err(FlattenError::DestinationExists {
                src: src.to_path_buf(),
                dest,
            }
            .into());
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_error_with_help("inspect destination", &dest)(e)),
    }

    fs::rename(src, &dest).map_err(io_error_with_help("move entry to", &dest))?;
    debug!(src = %src.display(), dest = %dest.display(), "Renamed entry");
    Ok(dest)
}
