//! XML configuration support.
//! - Loads optional settings from config.xml (quick_xml + serde).
//! - A missing file means "use defaults"; nothing is ever written here.
//!
//! Notes:
//! - Unknown XML fields are rejected to surface misconfigurations early.

use anyhow::Result;
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::LogLevel;
use crate::errors::FlattenError;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "target_name")]
    target_name: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "single_pass", default, deserialize_with = "de_bool_trimmed_opt")]
    single_pass: Option<bool>,
}

/// Settings found in a config file; `None` fields were absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlSettings {
    pub target_name: Option<String>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub single_pass: Option<bool>,
}

// Custom deserializer that trims surrounding whitespace for an optional bool
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Some(true)),
            "false" | "no" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "expected true/false for single_pass, got '{other}'"
            ))),
        },
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn xml_to_settings(parsed: XmlConfig, path: &Path) -> Result<XmlSettings> {
    let log_level = match non_empty(parsed.log_level) {
        Some(s) => Some(s.parse::<LogLevel>().map_err(|reason| FlattenError::Config {
            path: path.to_path_buf(),
            reason,
        })?),
        None => None,
    };

    Ok(XmlSettings {
        target_name: non_empty(parsed.target_name),
        log_level,
        log_file: non_empty(parsed.log_file).map(PathBuf::from),
        single_pass: parsed.single_pass,
    })
}

/// Load settings from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<XmlSettings> {
    let contents = fs::read_to_string(path).map_err(|e| FlattenError::Config {
        path: path.to_path_buf(),
        reason: format!("cannot read file: {e}"),
    })?;
    let parsed: XmlConfig = from_xml_str(&contents).map_err(|e| FlattenError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    xml_to_settings(parsed, path)
}

/// Read settings from the default (or `$DIR_FLATTEN_CONFIG`) location.
/// Returns Ok(None) if the file doesn't exist.
pub fn load_config_from_xml() -> Result<Option<XmlSettings>> {
    let Some(cfg_path) = default_config_path() else {
        debug!("No config location could be determined; using defaults");
        return Ok(None);
    };
    if !cfg_path.exists() {
        debug!(path = %cfg_path.display(), "No config file; using defaults");
        return Ok(None);
    }
    load_config_from_xml_path(&cfg_path).map(Some)
}
