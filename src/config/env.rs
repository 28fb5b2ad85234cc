//! Environment overrides.
//! Applied after the XML file; empty values are ignored.

use std::env;
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::errors::LauncherError;
use crate::layout::Layout;

pub const ENV_BIN_DIR: &str = "AICOMMIT_BIN_DIR";
pub const ENV_LAYOUT: &str = "AICOMMIT_LAYOUT";
pub const ENV_LOG: &str = "AICOMMIT_LAUNCHER_LOG";
pub const ENV_DEBUG: &str = "AICOMMIT_LAUNCHER_DEBUG";

/// Apply the process environment onto `cfg`.
pub fn apply_env(cfg: &mut Config) -> Result<(), LauncherError> {
    apply_from(cfg, |k| env::var(k).ok())
}

/// Apply overrides read through `lookup` (injectable for tests).
pub fn apply_from<F>(cfg: &mut Config, lookup: F) -> Result<(), LauncherError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(dir) = get(ENV_BIN_DIR) {
        cfg.bin_dir = PathBuf::from(dir);
    }
    if let Some(layout) = get(ENV_LAYOUT) {
        cfg.layout = layout
            .parse::<Layout>()
            .map_err(|e| LauncherError::Config(format!("{ENV_LAYOUT}: {e}")))?;
    }
    if let Some(level) = get(ENV_LOG) {
        cfg.log_level = level
            .parse::<LogLevel>()
            .map_err(|e| LauncherError::Config(format!("{ENV_LOG}: {e}")))?;
    }
    // Debug switch wins over the level variable; 0/false/no (any case) turn it off.
    if let Some(flag) = get(ENV_DEBUG)
        && !matches!(flag.to_ascii_lowercase().as_str(), "0" | "false" | "no")
    {
        cfg.log_level = LogLevel::Debug;
    }
    Ok(())
}
