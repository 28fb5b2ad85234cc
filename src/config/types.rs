//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::PRODUCT_DEFAULT;
use super::paths;
use crate::layout::Layout;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Errors and warnings (default)
    #[default]
    Normal,
    /// Adds informational events
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
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

/// Runtime configuration used by the launcher.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the packaged binaries
    pub bin_dir: PathBuf,
    /// Product name used in file names
    pub product: String,
    /// Active directory convention
    pub layout: Layout,
    /// Diagnostic verbosity (stderr)
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Include a directory listing when the binary is missing
    pub list_dir_on_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bin_dir: paths::default_bin_dir(),
            product: PRODUCT_DEFAULT.to_string(),
            layout: Layout::build_default(),
            log_level: LogLevel::Normal,
            log_file: None,
            list_dir_on_missing: true,
        }
    }
}

impl Config {
    /// Construct a Config for an explicit bin dir; other fields use defaults.
    pub fn new(bin_dir: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            bin_dir: bin_dir.into(),
            layout,
            ..Default::default()
        }
    }
}
