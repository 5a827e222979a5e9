//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - A missing file at the default location means "use defaults"; a missing file
//!   named explicitly (flag or env) is an error.
//!
//! Notes:
//! - Unknown XML fields are rejected to surface misconfigurations early.
//! - Values are trimmed before parsing.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{config_path, ConfigSource};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "json_logs", default, deserialize_with = "de_bool_trimmed_opt")]
    json_logs: Option<bool>,
    /// Overrides host detection for `--preserve`.
    #[serde(rename = "preserve_supported", default, deserialize_with = "de_bool_trimmed_opt")]
    preserve_supported: Option<bool>,
}

// Custom deserializer that trims surrounding whitespace for optional bool
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(serde::de::Error::custom(format!("invalid boolean '{s}'"))),
        },
    }
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            match LogLevel::parse(trimmed) {
                Some(level) => cfg.log_level = level,
                None => bail!("invalid log_level '{trimmed}'"),
            }
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    if let Some(json) = parsed.json_logs {
        cfg.json = json;
    }
    if let Some(preserve) = parsed.preserve_supported {
        cfg.capabilities.preserve_permissions = preserve;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid config xml '{}'", path.display()))
}

/// Load the effective Config (see `config_path` for lookup order).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match config_path(explicit) {
        Some((path, ConfigSource::Default)) if !path.exists() => {
            debug!("No config file at {}; using defaults", path.display());
            Ok(Config::default())
        }
        Some((path, _)) => load_config_from_xml_path(&path),
        None => Ok(Config::default()),
    }
}
