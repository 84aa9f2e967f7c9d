//! I/O helper utilities.
//!
//! Enriches io::Error with the operation, the path and a platform-aware hint,
//! usable with map_err in anyhow::Result code paths.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create target directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and write permissions.");
                }
                libc::EXDEV => {
                    msg.push_str("; cross-filesystem move is not supported, keep entries on one device.");
                }
                libc::EBUSY => {
                    msg.push_str("; resource busy, ensure no other process is using it.");
                }
                libc::ENOENT => {
                    msg.push_str("; path not found, it may have been removed during the run.");
                }
                libc::EEXIST | libc::ENOTEMPTY => {
                    msg.push_str("; already exists or not empty.");
                }
                libc::ENOSPC => {
                    msg.push_str("; insufficient space on device.");
                }
                libc::EROFS => {
                    msg.push_str("; read-only filesystem, cannot write here.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str("; filename or path too long.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions."), // ERROR_ACCESS_DENIED
                17 => msg.push_str("; not same device, cross-filesystem move is not supported."), // ERROR_NOT_SAME_DEVICE
                32 => msg.push_str("; sharing violation, file is in use."), // ERROR_SHARING_VIOLATION
                2 | 3 => msg.push_str("; path not found."),
                80 | 183 => msg.push_str("; already exists."), // ERROR_FILE_EXISTS / ERROR_ALREADY_EXISTS
                145 => msg.push_str("; directory not empty."), // ERROR_DIR_NOT_EMPTY
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str("; permission denied, check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str("; path not found, it may have been removed during the run.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str("; already exists.");
            }
            _ => {}
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notfound_fallback_hint_includes_path() {
        let p = Path::new("/nonexistent/path/for/test");
        let err = io_error_with_help("list directory", p)(io::Error::from(io::ErrorKind::NotFound));
        let msg = err.to_string();
        assert!(msg.contains("list directory"));
        assert!(msg.contains(p.to_string_lossy().as_ref()));
        assert!(msg.contains("path not found"));
    }

    #[cfg(unix)]
    #[test]
    fn cross_device_hint_and_code_present() {
        let p = Path::new("/mnt/other");
        let err = io_error_with_help("move entry", p)(io::Error::from_raw_os_error(libc::EXDEV));
        let msg = err.to_string();
        assert!(msg.contains("cross-filesystem"), "msg was: {msg}");
        assert!(msg.contains("os code"), "msg was: {msg}");
    }
}
