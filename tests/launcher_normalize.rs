#![cfg(unix)]

mod common;

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn canonical_layout_renames_platform_binary_and_runs_it() {
    let Some(name) = common::host_flat_name() else {
        eprintln!("skipping: host is not a shipped target");
        return;
    };
    let td = tempdir().unwrap();
    common::write_script(&td.path().join(&name), "printf renamed");

    let out = common::launcher(td.path(), td.path(), "canonical")
        .output()
        .expect("spawn launcher");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(out.stdout, b"renamed");
    assert!(!td.path().join(&name).exists(), "source should be renamed away");
    assert!(td.path().join(common::host_canonical_name()).is_file());
}

#[test]
#[serial]
fn missing_source_warns_and_continues() {
    if common::host_flat_name().is_none() {
        return;
    }
    let td = tempdir().unwrap();
    common::write_script(&td.path().join(common::host_canonical_name()), "exit 3");

    let out = common::launcher(td.path(), td.path(), "canonical")
        .output()
        .expect("spawn launcher");

    assert_eq!(out.status.code(), Some(3), "canonical binary from a prior run should run");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("WARN"), "expected a warning, got: {stderr}");
    assert!(stderr.contains("continuing with the canonical name"), "stderr: {stderr}");
}

#[test]
#[serial]
fn quiet_level_hides_the_warning() {
    if common::host_flat_name().is_none() {
        return;
    }
    let td = tempdir().unwrap();
    common::write_script(&td.path().join(common::host_canonical_name()), "exit 0");

    let out = common::launcher(td.path(), td.path(), "canonical")
        .env(aicommit_launcher::config::env::ENV_LOG, "quiet")
        .output()
        .expect("spawn launcher");

    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}
