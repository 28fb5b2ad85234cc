//! CLI definition for `aicommit-locate`.
//!
//! The launcher itself has no flags (every argument belongs to the product
//! binary); this companion tool reports what the launcher would run.
//!
//! Notes:
//! - Flags override env and XML config values.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::layout::Layout;

/// Show which packaged aicommit binary the launcher would run.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Print the aicommit binary the launcher resolves for a platform"
)]
pub struct LocateArgs {
    /// Platform identifier (default: this host). e.g. linux, macos, windows, darwin, win32
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Architecture identifier (default: this host). e.g. x86_64, aarch64, x64, arm64
    #[arg(long, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Directory convention: flat, nested or canonical.
    #[arg(long, value_name = "LAYOUT")]
    pub layout: Option<Layout>,

    /// Directory holding the packaged binaries.
    #[arg(long, value_hint = ValueHint::DirPath, help = "Override the packaged bin directory")]
    pub bin_dir: Option<PathBuf>,

    /// Product name used in packaged file names.
    #[arg(long, value_name = "NAME")]
    pub product: Option<String>,

    /// Also verify the binary exists (lists the bin dir when it does not).
    #[arg(long, help = "Fail if the resolved binary is missing")]
    pub check: bool,

    /// Print the config file in use and the effective settings, then exit.
    #[arg(long, help = "Print the effective launcher configuration and exit")]
    pub print_config: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,
}

impl LocateArgs {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Platform to resolve: flag or host.
    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or(std::env::consts::OS)
    }

    /// Architecture to resolve: flag or host.
    pub fn arch(&self) -> &str {
        self.arch.as_deref().unwrap_or(std::env::consts::ARCH)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.bin_dir {
            cfg.bin_dir = dir.clone();
        }
        if let Some(product) = &self.product {
            cfg.product = product.clone();
        }
        if let Some(layout) = self.layout {
            cfg.layout = layout;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
    }
}

pub fn parse() -> LocateArgs {
    LocateArgs::parse()
}
