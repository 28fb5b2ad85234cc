//! Core library for the `aicommit` launcher.
//!
//! Resolves the prebuilt `aicommit` binary for the host platform/architecture,
//! prepares it (rename, chmod) and runs it with inherited stdio, handing back
//! the child's exit code.
//!
//! The pipeline is: `resolve` (pure) -> `normalize` (canonical layout only) ->
//! `guard` (exists, chmod 0755) -> `launch`.

pub mod cli;
pub mod config;
pub mod errors;
pub mod guard;
pub mod launch;
pub mod layout;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod platform;
pub mod resolve;
pub mod shutdown;

use std::ffi::OsString;

use tracing::debug;

pub use config::{Config, LogLevel};
pub use errors::LauncherError;
pub use guard::{ModeSetter, OsModeSetter};
pub use launch::{FAILURE_EXIT_CODE, launch};
pub use layout::Layout;
pub use normalize::{NormalizeOutcome, normalize};
pub use resolve::{ArchKey, BinaryDescriptor, PlatformKey, resolve, resolve_keys};

/// Resolve and prepare the binary for the given host identifiers.
///
/// Nothing on disk is touched until both keys resolve.
pub fn prepare_binary(
    cfg: &Config,
    platform: &str,
    arch: &str,
    setter: &dyn ModeSetter,
) -> Result<BinaryDescriptor, LauncherError> {
    let desc = resolve(platform, arch, cfg.layout, &cfg.bin_dir, &cfg.product)?;
    if cfg.layout == Layout::Canonical {
        let outcome = normalize(&cfg.bin_dir, &cfg.product, desc.platform, desc.arch, setter)?;
        debug!(?outcome, "Normalizer finished");
    }
    guard::prepare(&desc, cfg.list_dir_on_missing, setter)?;
    Ok(desc)
}

/// Prepare the binary for the given identifiers and run it to completion.
///
/// Returns the child's exit code; any error means nothing was spawned.
pub fn run_with<I>(
    cfg: &Config,
    platform: &str,
    arch: &str,
    setter: &dyn ModeSetter,
    args: I,
) -> Result<i32, LauncherError>
where
    I: IntoIterator<Item = OsString>,
{
    let desc = prepare_binary(cfg, platform, arch, setter)?;
    launch(&desc, args)
}

/// Prepare the host binary and run it to completion; returns its exit code.
pub fn run_binary<I>(cfg: &Config, args: I) -> Result<i32, LauncherError>
where
    I: IntoIterator<Item = OsString>,
{
    run_with(
        cfg,
        std::env::consts::OS,
        std::env::consts::ARCH,
        &OsModeSetter,
        args,
    )
}
