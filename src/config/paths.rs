//! Default path helpers and symlink checks.
//! Locates the launcher's own directory, the packaged bin dir and the config file.

use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{BIN_DIR_NAME, CONFIG_FILE_NAME, ENV_CONFIG};

/// Directory containing the running launcher executable (symlinks resolved).
pub fn launcher_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let exe = dunce::canonicalize(&exe).unwrap_or(exe);
    exe.parent().map(Path::to_path_buf)
}

/// `<launcher dir>/bin`, or `./bin` if the executable path is unknown.
pub fn default_bin_dir() -> PathBuf {
    launcher_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(BIN_DIR_NAME)
}

/// Config file to read, if any.
///
/// Search order:
///  - $AICOMMIT_LAUNCHER_CONFIG (explicit; returned even if missing so the
///    caller can report it)
///  - `launcher.xml` next to the launcher executable
///  - `<config_dir>/aicommit/launcher.xml`
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(ENV_CONFIG).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(p));
    }
    let beside = launcher_dir().map(|d| d.join(CONFIG_FILE_NAME));
    let user = config_dir().map(|d| d.join("aicommit").join(CONFIG_FILE_NAME));
    [beside, user].into_iter().flatten().find(|p| p.is_file())
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
