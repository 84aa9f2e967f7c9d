//! One-level directory listings.
//! Both helpers walk exactly depth 1 and never follow symlinks; order is
//! whatever the filesystem returns.

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

fn walk_error(dir: &Path) -> impl Fn(walkdir::Error) -> anyhow::Error + '_ {
    move |e| match e.io_error() {
        Some(ioe) => anyhow!(
            "list directory '{}': {}",
            e.path().unwrap_or(dir).display(),
            ioe
        ),
        None => anyhow!("list directory '{}': {}", dir.display(), e),
    }
}

/// Immediate subdirectories of `root`, excluding the one named `target_name`.
pub fn list_candidates(root: &Path, target_name: &str) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(walk_error(root))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name() == target_name {
            continue;
        }
        trace!(candidate = %entry.path().display(), "candidate subdirectory");
        out.push(entry.into_path());
    }
    Ok(out)
}

/// Count candidates without keeping their paths.
pub fn count_candidates(root: &Path, target_name: &str) -> Result<usize> {
    list_candidates(root, target_name).map(|c| c.len())
}

/// Every direct entry of `dir`, hidden ones included.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|e| e.map(walkdir::DirEntry::into_path).map_err(walk_error(dir)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn candidates_skip_target_and_files() {
        let root = assert_fs::TempDir::new().unwrap();
        root.child("abc").create_dir_all().unwrap();
        root.child("a").create_dir_all().unwrap();
        root.child(".hidden_dir").create_dir_all().unwrap();
        root.child("loose.txt").touch().unwrap();

        let mut names: Vec<_> = list_candidates(root.path(), "abc")
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec![".hidden_dir", "a"]);
        assert_eq!(count_candidates(root.path(), "abc").unwrap(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_candidates() {
        let root = assert_fs::TempDir::new().unwrap();
        let outside = assert_fs::TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), root.path().join("link")).unwrap();

        assert!(list_candidates(root.path(), "abc").unwrap().is_empty());
    }

    #[test]
    fn entries_include_hidden_and_nested_dirs_only_one_level() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child(".dotfile").touch().unwrap();
        dir.child("sub/deep.txt").touch().unwrap();

        let mut names: Vec<_> = list_entries(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec![".dotfile", "sub"]);
    }

    #[test]
    fn empty_dir_has_no_entries() {
        let dir = assert_fs::TempDir::new().unwrap();
        assert!(list_entries(dir.path()).unwrap().is_empty());
    }
}
