//! Interrupt handling while the child runs.
//!
//! The terminal delivers ctrl-c to the whole foreground process group, so the
//! child sees it directly. The launcher must not die first: it records the
//! interrupt and keeps waiting so the child's own exit code is propagated.
//!
//! Notes:
//! - Relaxed atomics are sufficient for a one-way flag.
//! - `request()` is safe to call from signal handlers.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Record an interrupt (idempotent).
#[inline]
pub fn request() {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

/// Whether an interrupt arrived while the child was running.
#[inline]
pub fn is_requested() -> bool {
    INTERRUPTED.load(Ordering::Relaxed)
}

/// Install the handler. Failure is logged and ignored: without it the launcher
/// falls back to the default disposition and dies alongside the child.
pub fn install_handler() {
    if let Err(e) = ctrlc::set_handler(request) {
        debug!(error = %e, "Could not install interrupt handler");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_sets_flag() {
        request();
        assert!(is_requested());
    }
}
