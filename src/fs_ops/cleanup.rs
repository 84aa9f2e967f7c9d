//! Removing candidates left empty after their contents moved.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::enumerate::list_entries;
use super::helpers::io_error_with_help;

/// What happened to a candidate after its contents were moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleanup {
    Deleted,
    /// Still has entries (something wrote into it during the run).
    Retained { remaining: usize },
}

/// Delete `candidate` if it is empty, otherwise leave it in place.
pub fn cleanup_candidate(candidate: &Path) -> Result<Cleanup> {
    let remaining = list_entries(candidate)?.len();
    if remaining > 0 {
        warn!(candidate = %candidate.display(), remaining, "Candidate not empty after move; keeping it");
        return Ok(Cleanup::Retained { remaining });
    }

    fs::remove_dir(candidate).map_err(io_error_with_help("remove empty directory", candidate))?;
    info!(candidate = %candidate.display(), "Removed empty candidate");
    Ok(Cleanup::Deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn empty_candidate_is_deleted() {
        let root = assert_fs::TempDir::new().unwrap();
        let cand = root.child("gone");
        cand.create_dir_all().unwrap();

        assert_eq!(cleanup_candidate(cand.path()).unwrap(), Cleanup::Deleted);
        assert!(!cand.path().exists());
    }

    #[test]
    fn non_empty_candidate_is_retained() {
        let root = assert_fs::TempDir::new().unwrap();
        let cand = root.child("busy");
        cand.child("late_arrival.txt").touch().unwrap();

        assert_eq!(
            cleanup_candidate(cand.path()).unwrap(),
            Cleanup::Retained { remaining: 1 }
        );
        assert!(cand.path().is_dir());
    }
}
