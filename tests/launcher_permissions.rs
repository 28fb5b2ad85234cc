#![cfg(unix)]

mod common;

use aicommit_launcher::{Config, LauncherError, Layout, ModeSetter, run_with};
use serial_test::serial;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::tempdir;

struct DenyChmod;
impl ModeSetter for DenyChmod {
    fn set_executable(&self, _path: &Path) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::PermissionDenied))
    }
}

#[test]
#[serial]
fn launcher_sets_mode_0755_before_running() {
    let Some(name) = common::host_flat_name() else {
        eprintln!("skipping: host is not a shipped target");
        return;
    };
    let td = tempdir().unwrap();
    let bin = td.path().join(&name);
    common::write_script(&bin, "exit 0");

    let out = common::launcher(td.path(), td.path(), "flat")
        .output()
        .expect("spawn launcher");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let mode = fs::metadata(&bin).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o755);
}

#[test]
#[serial]
fn permission_failure_never_spawns() {
    let td = tempdir().unwrap();
    let marker = td.path().join("spawned");
    common::write_script(
        &td.path().join("aicommit-macos-aarch64"),
        &format!("touch '{}'", marker.display()),
    );
    let cfg = Config::new(td.path(), Layout::Flat);

    let err = run_with(&cfg, "macos", "aarch64", &DenyChmod, Vec::<OsString>::new()).unwrap_err();

    assert!(matches!(err, LauncherError::PermissionSetFailure { .. }));
    assert!(err.to_string().contains("Failed to make binary executable"));
    assert!(!marker.exists(), "binary must not run after a chmod failure");
}

#[test]
fn not_found_never_spawns() {
    let td = tempdir().unwrap();
    let cfg = Config::new(td.path().join("missing"), Layout::Nested);
    let err = run_with(&cfg, "linux", "x86_64", &DenyChmod, Vec::<OsString>::new()).unwrap_err();
    assert!(matches!(err, LauncherError::BinaryNotFound { .. }));
}
