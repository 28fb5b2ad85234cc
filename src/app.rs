//! Launcher orchestrator.
//! Loads config, initializes logging, installs the interrupt handler, prepares
//! the binary and runs it. Returns the exit code for `main` to exit with.

use std::ffi::OsString;

use aicommit_launcher::output as out;
use aicommit_launcher::{FAILURE_EXIT_CODE, LauncherError, config, run_binary, shutdown};
use tracing::debug;

use aicommit_launcher::logging::init_tracing;

/// Run the launcher with the forwarded arguments.
pub fn run(args: Vec<OsString>) -> i32 {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            out::print_error(&e.to_string());
            return FAILURE_EXIT_CODE;
        }
    };

    let guard = match init_tracing(&cfg.log_level, cfg.log_file.as_deref()) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e:#}"));
            return FAILURE_EXIT_CODE;
        }
    };

    shutdown::install_handler();
    debug!(?args, bin_dir = %cfg.bin_dir.display(), layout = %cfg.layout, "Starting launcher");

    let code = match run_binary(&cfg, args) {
        Ok(code) => {
            if shutdown::is_requested() {
                debug!(code, "Binary exited after interrupt");
            }
            code
        }
        Err(e) => {
            report(&e);
            FAILURE_EXIT_CODE
        }
    };

    // Flush the file appender; process::exit will not run destructors.
    drop(guard);
    code
}

/// One human-readable line on stderr; structured fields go to the debug log.
fn report(e: &LauncherError) {
    let code = e.code();
    let kind = e.kind();
    match e {
        LauncherError::BinaryNotFound { path, .. } => {
            debug!(code, kind, path = %path.display(), "Binary not found")
        }
        LauncherError::PermissionSetFailure { path, source } => {
            debug!(code, kind, path = %path.display(), error = %source, "Could not set permissions")
        }
        LauncherError::SpawnFailure { path, source } => {
            debug!(code, kind, path = %path.display(), error = %source, "Could not start binary")
        }
        _ => debug!(code, kind, error = %e, "Launcher failed"),
    }
    out::print_error(&e.to_string());
}
