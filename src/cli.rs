//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - CLI flags override values loaded from the XML config.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use dir_flatten::config::ROOT_DEFAULT;
use dir_flatten::{Config, LogLevel};

/// Move the contents of every subdirectory into a single `abc` folder.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Flatten a directory one level deep into a single target folder"
)]
pub struct Args {
    /// Directory containing subdirectories to process (default: current directory).
    #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath, default_value = ROOT_DEFAULT)]
    pub source_dir: PathBuf,

    /// Name of the consolidation directory created under SOURCE_DIR.
    #[arg(long, value_name = "NAME", help = "Target directory name (default: abc)")]
    pub target_name: Option<String>,

    /// Run the flatten pass once instead of once per discovered folder.
    #[arg(long, help = "Run a single flatten pass instead of one per folder")]
    pub single_pass: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Also write diagnostic logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Append diagnostic logs to a file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit diagnostic logs in structured JSON")]
    pub json: bool,

    /// Print where dir_flatten looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        cfg.root = self.source_dir.clone();
        if let Some(name) = &self.target_name {
            cfg.target_name = name.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        if self.single_pass {
            cfg.single_pass = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let args = Args::try_parse_from(["dir_flatten"]).unwrap();
        assert_eq!(args.source_dir, PathBuf::from("."));
        assert!(!args.single_pass);
        assert_eq!(args.effective_log_level(), None);
    }

    #[test]
    fn debug_wins_over_log_level() {
        let args = Args::try_parse_from(["dir_flatten", "--log-level", "quiet", "-d"]).unwrap();
        assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));
    }

    #[test]
    fn overrides_replace_config_values() {
        let args = Args::try_parse_from([
            "dir_flatten",
            "/data/in",
            "--target-name",
            "merged",
            "--single-pass",
        ])
        .unwrap();
        let mut cfg = Config::default();
        args.apply_overrides(&mut cfg);
        assert_eq!(cfg.root, PathBuf::from("/data/in"));
        assert_eq!(cfg.target_name, "merged");
        assert!(cfg.single_pass);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Args::try_parse_from(["dir_flatten", "--log-level", "loud"]).is_err());
    }
}
