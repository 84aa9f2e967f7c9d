//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{CONFIG_ENV_VAR, default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use validate::validate_target_name;
pub use xml::{XmlSettings, load_config_from_xml, load_config_from_xml_path};

/// Name of the consolidation directory created under the root.
pub const TARGET_NAME_DEFAULT: &str = "abc";
/// Root used when no SOURCE_DIR is given.
pub const ROOT_DEFAULT: &str = ".";
