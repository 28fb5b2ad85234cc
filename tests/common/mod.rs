#![allow(dead_code)]
//! Shared fixtures: isolated config, fake product binaries and a launcher command.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use aicommit_launcher::config::ENV_CONFIG;
use aicommit_launcher::config::env::{ENV_BIN_DIR, ENV_DEBUG, ENV_LAYOUT, ENV_LOG};
use aicommit_launcher::layout::flat_file_name;
use aicommit_launcher::resolve::resolve_keys;
use assert_cmd::cargo::cargo_bin;

/// Flat file name for this host, or None when the host is not a shipped target.
pub fn host_flat_name() -> Option<String> {
    let (p, a) = resolve_keys(std::env::consts::OS, std::env::consts::ARCH).ok()?;
    Some(flat_file_name("aicommit", p, a))
}

/// Canonical file name for this host.
pub fn host_canonical_name() -> String {
    format!("aicommit{}", std::env::consts::EXE_SUFFIX)
}

/// Write a `/bin/sh` script with mode 0644; the launcher is expected to chmod it.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o644)).expect("chmod script");
}

/// Empty config file so a developer's own launcher.xml never leaks into tests.
pub fn isolated_config(dir: &Path) -> PathBuf {
    let p = dir.join("launcher.xml");
    fs::write(&p, "<config></config>\n").expect("write config");
    p
}

/// `aicommit` with a clean environment pointing at `bin_dir`.
pub fn launcher(cfg_dir: &Path, bin_dir: &Path, layout: &str) -> Command {
    let mut cmd = Command::new(cargo_bin!("aicommit"));
    cmd.env(ENV_CONFIG, isolated_config(cfg_dir))
        .env(ENV_BIN_DIR, bin_dir)
        .env(ENV_LAYOUT, layout)
        .env_remove(ENV_LOG)
        .env_remove(ENV_DEBUG);
    cmd
}
