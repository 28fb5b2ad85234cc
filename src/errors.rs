//! Typed error definitions for the launcher.
//! Every launcher-level failure is fatal; the child's own exit code is not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Unsupported architecture: {0}")]
    UnsupportedArchitecture(String),

    #[error("{platform} builds are only available for {allowed}; got architecture {arch}")]
    ArchitectureNotAllowed {
        platform: &'static str,
        arch: &'static str,
        allowed: &'static str,
    },

    #[error("Binary not found: {}{}", .path.display(), render_listing(.listing))]
    BinaryNotFound {
        path: PathBuf,
        listing: Option<Vec<String>>,
    },

    #[error("Failed to make binary executable: {}: {source}", .path.display())]
    PermissionSetFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rename {} -> {}: {source}", .from.display(), .to.display())]
    NormalizeFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start binary {}: {source}", .path.display())]
    SpawnFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid launcher configuration: {0}")]
    Config(String),
}

impl LauncherError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            LauncherError::UnsupportedPlatform(_) => 10,
            LauncherError::UnsupportedArchitecture(_) => 11,
            LauncherError::ArchitectureNotAllowed { .. } => 12,
            LauncherError::BinaryNotFound { .. } => 20,
            LauncherError::PermissionSetFailure { .. } => 21,
            LauncherError::NormalizeFailure { .. } => 22,
            LauncherError::SpawnFailure { .. } => 30,
            LauncherError::Config(_) => 40,
        }
    }

    /// Short machine-friendly name used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            LauncherError::UnsupportedPlatform(_) => "unsupported_platform",
            LauncherError::UnsupportedArchitecture(_) => "unsupported_architecture",
            LauncherError::ArchitectureNotAllowed { .. } => "architecture_not_allowed",
            LauncherError::BinaryNotFound { .. } => "binary_not_found",
            LauncherError::PermissionSetFailure { .. } => "permission_set_failure",
            LauncherError::NormalizeFailure { .. } => "normalize_failure",
            LauncherError::SpawnFailure { .. } => "spawn_failure",
            LauncherError::Config(_) => "config",
        }
    }
}

fn render_listing(listing: &Option<Vec<String>>) -> String {
    match listing {
        None => String::new(),
        Some(entries) if entries.is_empty() => "\n  (directory is empty or missing)".to_string(),
        Some(entries) => {
            let mut s = String::from("\n  directory contents:");
            for e in entries {
                s.push_str("\n    ");
                s.push_str(e);
            }
            s
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_path_and_listing() {
        let err = LauncherError::BinaryNotFound {
            path: PathBuf::from("/opt/aicommit/bin/aicommit-linux-x86_64"),
            listing: Some(vec!["aicommit-macos-aarch64".into()]),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/aicommit/bin/aicommit-linux-x86_64"));
        assert!(msg.contains("aicommit-macos-aarch64"));
        assert_eq!(err.kind(), "binary_not_found");
    }

    #[test]
    fn not_found_without_listing_is_one_line() {
        let err = LauncherError::BinaryNotFound {
            path: PathBuf::from("bin/aicommit"),
            listing: None,
        };
        assert_eq!(err.to_string(), "Binary not found: bin/aicommit");
    }
}
