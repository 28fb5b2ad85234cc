//! Existence and permission guard.
//!
//! Runs between resolution and spawn: the resolved path must be a regular
//! file, and on platforms with POSIX modes it is chmod'ed to 0755 first.
//! A missing file and a failed chmod are distinct errors.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::errors::LauncherError;
use crate::layout::Layout;
use crate::platform;
use crate::resolve::BinaryDescriptor;

/// Cap on entries shown in a not-found listing.
const MAX_LISTING: usize = 50;

/// Seam for the permission step so failures can be simulated.
pub trait ModeSetter {
    fn set_executable(&self, path: &Path) -> io::Result<()>;
}

/// chmod 0755 through the platform layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsModeSetter;

impl ModeSetter for OsModeSetter {
    fn set_executable(&self, path: &Path) -> io::Result<()> {
        platform::set_file_mode_0755(path)
    }
}

/// Fail with `BinaryNotFound` unless the descriptor's path is a regular file.
///
/// When `list_dir` is set the error carries the files that *are* present, which
/// makes packaging mistakes (wrong arch suffix, wrong layout) obvious.
pub fn ensure_present(desc: &BinaryDescriptor, list_dir: bool) -> Result<(), LauncherError> {
    match std::fs::metadata(&desc.path) {
        Ok(meta) if meta.is_file() => {
            trace!(path = %desc.path.display(), "Binary present");
            Ok(())
        }
        _ => {
            let listing = list_dir.then(|| listing_for(desc));
            Err(LauncherError::BinaryNotFound {
                path: desc.path.clone(),
                listing,
            })
        }
    }
}

/// Set 0755 on the binary unless the platform is exempt.
pub fn ensure_executable(
    desc: &BinaryDescriptor,
    setter: &dyn ModeSetter,
) -> Result<(), LauncherError> {
    if !desc.requires_exec_bit {
        debug!(path = %desc.path.display(), "Skipping chmod on this platform");
        return Ok(());
    }
    setter
        .set_executable(&desc.path)
        .map_err(|source| LauncherError::PermissionSetFailure {
            path: desc.path.clone(),
            source,
        })
}

/// Both guard steps, in order.
pub fn prepare(
    desc: &BinaryDescriptor,
    list_dir: bool,
    setter: &dyn ModeSetter,
) -> Result<(), LauncherError> {
    ensure_present(desc, list_dir)?;
    ensure_executable(desc, setter)
}

/// Directory to list: the bin dir for nested layouts, else the file's parent.
fn listing_root(desc: &BinaryDescriptor) -> Option<PathBuf> {
    let parent = desc.path.parent()?;
    match desc.layout {
        Layout::Nested => parent.parent().map(Path::to_path_buf),
        Layout::Flat | Layout::Canonical => Some(parent.to_path_buf()),
    }
}

/// Entries under the listing root, two levels deep for every layout so a
/// package built for a different convention still shows what it contains.
/// Directories carry a trailing `/`.
fn listing_for(desc: &BinaryDescriptor) -> Vec<String> {
    let Some(root) = listing_root(desc) else {
        return Vec::new();
    };
    let mut entries: Vec<String> = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let rel = e.path().strip_prefix(&root).ok()?;
            let mut name = rel.to_string_lossy().replace('\\', "/");
            if e.file_type().is_dir() {
                name.push('/');
            }
            Some(name)
        })
        .collect();
    entries.sort();
    entries.truncate(MAX_LISTING);
    entries
}
