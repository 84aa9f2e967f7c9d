//! Config validation logic.
//! Only checks values that can be judged without touching the filesystem;
//! root existence is checked by `fs_ops::resolve_root`.

use anyhow::Result;
use std::path::{Component, Path};
use tracing::{error, info};

use super::types::Config;
use crate::errors::FlattenError;

impl Config {
    /// Validate settings before any directory is touched.
    pub fn validate(&self) -> Result<()> {
        validate_target_name(&self.target_name)?;
        info!(
            root = %self.root.display(),
            target = %self.target_name,
            single_pass = self.single_pass,
            "Config validated"
        );
        Ok(())
    }
}

/// The target must be exactly one normal path component so it always lands
/// directly under the root.
pub fn validate_target_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let ok = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\']);

    if !ok {
        error!(target_name = name, "Rejected target directory name");
        return Err(FlattenError::InvalidTargetName(name.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for name in ["abc", "merged", ".hidden", "with space"] {
            assert!(validate_target_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_paths_and_specials() {
        for name in ["", ".", "..", "a/b", "/abs", "a\\b", "abc/"] {
            assert!(validate_target_name(name).is_err(), "{name:?} should be invalid");
        }
    }
}
