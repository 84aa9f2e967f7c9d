//! Core library for `dir_flatten`.
//!
//! Flattens a directory one level deep: the contents of every immediate
//! subdirectory of a root are moved into a single target folder (`abc` by
//! default) and the emptied subdirectories are removed.
//!
//! The binary wires these pieces together; tests drive them directly.

pub mod config;
pub mod errors;
pub mod flatten;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod shutdown;

pub use config::{Config, LogLevel, TARGET_NAME_DEFAULT, default_config_path, path_has_symlink_ancestor};
pub use errors::{FlattenError, exit_code_for};
pub use flatten::{PassReport, RunReport, run, run_pass};
pub use fs_ops::resolve_root;
