//! Filesystem operations behind a flatten pass.

mod cleanup;
mod entry_move;
mod enumerate;
mod helpers;
mod resolve;
mod target;

pub use cleanup::{Cleanup, cleanup_candidate};
pub use entry_move::{MoveOutcome, move_contents};
pub use enumerate::{count_candidates, list_candidates, list_entries};
pub use helpers::io_error_with_help;
pub use resolve::resolve_root;
pub use target::{TargetStatus, ensure_target};
