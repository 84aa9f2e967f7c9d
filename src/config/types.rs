//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::xml::XmlSettings;
use super::{ROOT_DEFAULT, TARGET_NAME_DEFAULT};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default); status lines still go to stdout
    #[default]
    Normal,
    /// Informational diagnostics
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration used by the flattener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose immediate subdirectories are flattened
    pub root: PathBuf,
    /// Name of the consolidation directory under `root`
    pub target_name: String,
    /// Diagnostic log verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Run at most one flatten pass instead of one per discovered folder
    pub single_pass: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(ROOT_DEFAULT),
            target_name: TARGET_NAME_DEFAULT.to_string(),
            log_level: LogLevel::Normal,
            log_file: None,
            single_pass: false,
        }
    }
}

impl Config {
    /// Construct a Config for `root`; other fields use defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Path of the consolidation directory under the root.
    pub fn target_dir(&self) -> PathBuf {
        self.root.join(&self.target_name)
    }

    /// Overlay values present in an XML file. Unset fields keep their current value.
    pub fn apply_xml(&mut self, xml: XmlSettings) {
        if let Some(name) = xml.target_name {
            self.target_name = name;
        }
        if let Some(level) = xml.log_level {
            self.log_level = level;
        }
        if let Some(file) = xml.log_file {
            self.log_file = Some(file);
        }
        if let Some(single) = xml.single_pass {
            self.single_pass = single;
        }
    }
}
