//! Windows implementations of platform helpers.
//!
//! Windows lacks POSIX mode semantics; executability is decided by the file
//! extension, so mode helpers are no-ops.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Open log file for appending (best-effort; no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// No-op on Windows; POSIX-style file modes are not applicable.
pub fn set_file_mode_0755(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Any existing file counts as executable here.
#[cfg(test)]
pub fn is_executable(path: &Path) -> io::Result<bool> {
    std::fs::metadata(path).map(|m| m.is_file())
}
