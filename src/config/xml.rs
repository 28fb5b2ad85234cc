//! XML configuration support.
//! - Loads settings from launcher.xml (quick_xml).
//! - Relative paths in the file resolve against the file's directory.
//!
//! Notes:
//! - Unknown XML fields are a hard failure to surface misconfigurations early.
//! - Absent elements leave the current value untouched.

use quick_xml::de::DeError;
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};
use crate::errors::LauncherError;
use crate::layout::Layout;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
pub struct XmlConfig {
    #[serde(rename = "bin_dir")]
    pub bin_dir: Option<String>,
    #[serde(rename = "product")]
    pub product: Option<String>,
    #[serde(rename = "layout")]
    pub layout: Option<String>,
    #[serde(rename = "log_level")]
    pub log_level: Option<String>,
    #[serde(rename = "log_file")]
    pub log_file: Option<String>,
    #[serde(rename = "list_dir_on_missing", default, deserialize_with = "de_bool_trimmed_opt")]
    pub list_dir_on_missing: Option<bool>,
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
            "true" | "yes" | "1" => Ok(Some(true)),
            "false" | "no" | "0" => Ok(Some(false)),
            _ => Err(serde::de::Error::custom(format!("invalid boolean: '{s}'"))),
        },
    }
}

/// Parse XML text. The caller adds the file path to the error.
pub fn parse_xml(content: &str) -> Result<XmlConfig, DeError> {
    from_xml_str(content)
}

/// Read `path` and apply its settings onto `cfg`.
pub fn apply_file(cfg: &mut Config, path: &Path) -> Result<(), LauncherError> {
    let content = fs::read_to_string(path).map_err(|e| {
        LauncherError::Config(format!("cannot read config file {}: {e}", path.display()))
    })?;
    let parsed = parse_xml(&content)
        .map_err(|e| LauncherError::Config(format!("{}: {e}", path.display())))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    apply(cfg, parsed, base)
}

/// Map parsed fields onto `cfg`; relative paths join onto `base`.
pub fn apply(cfg: &mut Config, parsed: XmlConfig, base: &Path) -> Result<(), LauncherError> {
    if let Some(dir) = non_empty(parsed.bin_dir) {
        cfg.bin_dir = resolve_relative(base, &dir);
    }
    if let Some(product) = non_empty(parsed.product) {
        cfg.product = product;
    }
    if let Some(layout) = non_empty(parsed.layout) {
        cfg.layout = layout.parse::<Layout>().map_err(LauncherError::Config)?;
    }
    if let Some(level) = non_empty(parsed.log_level) {
        cfg.log_level = level.parse::<LogLevel>().map_err(LauncherError::Config)?;
    }
    if let Some(file) = non_empty(parsed.log_file) {
        cfg.log_file = Some(resolve_relative(base, &file));
    }
    if let Some(list) = parsed.list_dir_on_missing {
        cfg.list_dir_on_missing = list;
    }
    Ok(())
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn resolve_relative(base: &Path, value: &str) -> PathBuf {
    let p = PathBuf::from(value);
    if p.is_absolute() { p } else { base.join(p) }
}
