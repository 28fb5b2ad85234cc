//! Fallback normalizer for the canonical layout.
//!
//! Packages ship `<product>-<platform>-<arch>[.exe]`; on first run it is renamed
//! to `<product>[.exe]` so later runs (and anything else invoking the canonical
//! name) need no platform branching. A missing source is not an error: the
//! canonical file may already exist from an earlier run.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::LauncherError;
use crate::guard::ModeSetter;
use crate::layout::{flat_file_name, Layout};
use crate::resolve::{ArchKey, PlatformKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    SourceMissing { source: PathBuf },
}

/// Rename the flat-named binary to its canonical name and mark it executable.
pub fn normalize(
    bin_dir: &Path,
    product: &str,
    platform: PlatformKey,
    arch: ArchKey,
    setter: &dyn ModeSetter,
) -> Result<NormalizeOutcome, LauncherError> {
    let from = bin_dir.join(flat_file_name(product, platform, arch));
    let to = Layout::Canonical.binary_path(bin_dir, product, platform, arch);

    if !from.is_file() {
        return Ok(missing(from));
    }

    match std::fs::rename(&from, &to) {
        Ok(()) => {}
        // Lost a race with a concurrent launcher that already renamed it.
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(missing(from)),
        Err(source) => return Err(LauncherError::NormalizeFailure { from, to, source }),
    }

    if platform.requires_exec_bit() {
        setter
            .set_executable(&to)
            .map_err(|source| LauncherError::PermissionSetFailure {
                path: to.clone(),
                source,
            })?;
    }

    info!(from = %from.display(), to = %to.display(), "Renamed binary to canonical name");
    Ok(NormalizeOutcome::Renamed { from, to })
}

fn missing(source: PathBuf) -> NormalizeOutcome {
    warn!(
        source = %source.display(),
        "Platform binary not found for rename; continuing with the canonical name"
    );
    NormalizeOutcome::SourceMissing { source }
}
