//! Process launch.
//!
//! Spawns the resolved binary with the forwarded arguments and inherited stdio,
//! blocks until it exits, and hands back the exit code to use as our own.

use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::errors::LauncherError;
use crate::resolve::BinaryDescriptor;

/// Exit code for every launcher-level failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Run the binary to completion and return the exit code to propagate.
///
/// A spawn failure is an error; a non-zero child exit is not.
pub fn launch<I>(desc: &BinaryDescriptor, args: I) -> Result<i32, LauncherError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut child = Command::new(&desc.path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| LauncherError::SpawnFailure {
            path: desc.path.clone(),
            source,
        })?;
    debug!(pid = child.id(), path = %desc.path.display(), "Spawned binary");

    let status = child.wait().map_err(|source| LauncherError::SpawnFailure {
        path: desc.path.clone(),
        source,
    })?;
    let code = exit_code(status);
    debug!(code, %status, "Binary exited");
    Ok(code)
}

/// Exit code to propagate for a finished child.
///
/// Signal deaths map to `128 + signo`, as shells report them.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    FAILURE_EXIT_CODE
}
