//! Launcher configuration.
//! Provides configuration types, default paths, XML loading and env overrides.
//!
//! Precedence (lowest to highest): compiled defaults, XML file, environment.

pub mod env;
pub mod paths;
pub mod types;
pub mod xml;

use std::path::PathBuf;

use tracing::debug;

pub use paths::{config_file_path, default_bin_dir, launcher_dir, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};

use crate::errors::LauncherError;

/// Product name used in packaged file names.
pub const PRODUCT_DEFAULT: &str = "aicommit";
/// Directory, relative to the launcher executable, holding packaged binaries.
pub const BIN_DIR_NAME: &str = "bin";
/// File name looked up next to the launcher and in the user config dir.
pub const CONFIG_FILE_NAME: &str = "launcher.xml";

/// Env var naming an explicit config file.
pub const ENV_CONFIG: &str = "AICOMMIT_LAUNCHER_CONFIG";

/// Build the effective config from defaults, the XML file (if any) and env.
pub fn load() -> Result<Config, LauncherError> {
    let mut cfg = Config::default();
    let path: Option<PathBuf> = config_file_path();
    if let Some(p) = &path {
        xml::apply_file(&mut cfg, p)?;
    }
    env::apply_env(&mut cfg)?;
    debug!(config_file = ?path, ?cfg, "Loaded launcher config");
    Ok(cfg)
}
