//! Config module.
//! Provides configuration types, config file location and XML loading.
//! The file is optional: without one the defaults below apply.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{config_path, default_config_path, path_has_symlink_ancestor, ConfigSource, CONFIG_ENV};
pub use types::{Config, LogLevel};
pub use xml::{load_config, load_config_from_xml_path};
