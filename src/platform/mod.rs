//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{open_log_file_secure_append, set_file_mode_0755};

#[cfg(not(unix))]
pub use windows::{open_log_file_secure_append, set_file_mode_0755};

#[cfg(all(test, unix))]
pub use unix::is_executable;

#[cfg(all(test, not(unix)))]
pub use windows::is_executable;
