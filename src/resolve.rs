//! Platform/architecture resolution.
//!
//! Maps the host's platform and CPU architecture identifiers to a
//! `BinaryDescriptor`. This is a pure function of its inputs: it never touches
//! the filesystem, so unsupported hosts fail before any I/O happens.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::LauncherError;
use crate::layout::Layout;

/// Host OS family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKey {
    Windows,
    Linux,
    MacOs,
}

impl PlatformKey {
    /// Accepts Rust (`std::env::consts::OS`) and Node-style spellings.
    pub fn from_host(s: &str) -> Option<Self> {
        match s {
            "windows" | "win32" => Some(PlatformKey::Windows),
            "linux" => Some(PlatformKey::Linux),
            "macos" | "darwin" => Some(PlatformKey::MacOs),
            _ => None,
        }
    }

    /// Token used in packaged file and directory names.
    pub fn token(self) -> &'static str {
        match self {
            PlatformKey::Windows => "windows",
            PlatformKey::Linux => "linux",
            PlatformKey::MacOs => "macos",
        }
    }

    pub fn exe_suffix(self) -> &'static str {
        match self {
            PlatformKey::Windows => ".exe",
            _ => "",
        }
    }

    /// Windows has no POSIX mode bits to set.
    pub fn requires_exec_bit(self) -> bool {
        !matches!(self, PlatformKey::Windows)
    }

    /// The only architecture shipped for this platform, if it is restricted.
    fn only_arch(self) -> Option<ArchKey> {
        match self {
            PlatformKey::Linux => Some(ArchKey::X86_64),
            _ => None,
        }
    }
}

/// Host CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchKey {
    X86_64,
    Aarch64,
}

impl ArchKey {
    /// Accepts Rust (`std::env::consts::ARCH`) and Node-style spellings.
    pub fn from_host(s: &str) -> Option<Self> {
        match s {
            "x86_64" | "x64" | "amd64" => Some(ArchKey::X86_64),
            "aarch64" | "arm64" => Some(ArchKey::Aarch64),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ArchKey::X86_64 => "x86_64",
            ArchKey::Aarch64 => "aarch64",
        }
    }
}

/// Which executable to run, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryDescriptor {
    pub platform: PlatformKey,
    pub arch: ArchKey,
    pub layout: Layout,
    pub path: PathBuf,
    pub requires_exec_bit: bool,
}

/// Look up both keys and apply the per-platform architecture restriction.
pub fn resolve_keys(platform: &str, arch: &str) -> Result<(PlatformKey, ArchKey), LauncherError> {
    let p = PlatformKey::from_host(platform)
        .ok_or_else(|| LauncherError::UnsupportedPlatform(platform.to_string()))?;
    let a = ArchKey::from_host(arch)
        .ok_or_else(|| LauncherError::UnsupportedArchitecture(arch.to_string()))?;

    if let Some(only) = p.only_arch()
        && only != a
    {
        return Err(LauncherError::ArchitectureNotAllowed {
            platform: p.token(),
            arch: a.token(),
            allowed: only.token(),
        });
    }
    Ok((p, a))
}

/// Resolve raw host identifiers into a descriptor under `bin_dir`.
pub fn resolve(
    platform: &str,
    arch: &str,
    layout: Layout,
    bin_dir: &Path,
    product: &str,
) -> Result<BinaryDescriptor, LauncherError> {
    let (p, a) = resolve_keys(platform, arch)?;
    let path = layout.binary_path(bin_dir, product, p, a);
    debug!(platform = p.token(), arch = a.token(), %layout, path = %path.display(), "Resolved binary");
    Ok(BinaryDescriptor {
        platform: p,
        arch: a,
        layout,
        path,
        requires_exec_bit: p.requires_exec_bit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(platform: &str, arch: &str) -> Result<BinaryDescriptor, LauncherError> {
        resolve(platform, arch, Layout::Flat, Path::new("bin"), "aicommit")
    }

    #[test]
    fn supported_table_resolves_flat_names() {
        let cases = [
            ("windows", "x86_64", "bin/aicommit-windows-x86_64.exe"),
            ("windows", "aarch64", "bin/aicommit-windows-aarch64.exe"),
            ("linux", "x86_64", "bin/aicommit-linux-x86_64"),
            ("macos", "x86_64", "bin/aicommit-macos-x86_64"),
            ("macos", "aarch64", "bin/aicommit-macos-aarch64"),
        ];
        for (p, a, expected) in cases {
            let d = flat(p, a).unwrap();
            assert_eq!(d.path, PathBuf::from(expected), "{p}/{a}");
            // Deterministic
            assert_eq!(flat(p, a).unwrap(), d);
        }
    }

    #[test]
    fn node_style_spellings_are_accepted() {
        let d = flat("darwin", "arm64").unwrap();
        assert_eq!(d.platform, PlatformKey::MacOs);
        assert_eq!(d.arch, ArchKey::Aarch64);
        let d = flat("win32", "x64").unwrap();
        assert_eq!(d.path, PathBuf::from("bin/aicommit-windows-x86_64.exe"));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = flat("freebsd", "x86_64").unwrap_err();
        assert!(matches!(err, LauncherError::UnsupportedPlatform(ref s) if s == "freebsd"));
    }

    #[test]
    fn unknown_arch_is_rejected_generically() {
        for arch in ["x86", "ia32", "arm", "riscv64", ""] {
            let err = flat("macos", arch).unwrap_err();
            assert!(matches!(err, LauncherError::UnsupportedArchitecture(_)), "{arch}");
        }
        // 32-bit on the restricted platform still gets the generic error.
        let err = flat("linux", "x86").unwrap_err();
        assert!(matches!(err, LauncherError::UnsupportedArchitecture(_)));
    }

    #[test]
    fn linux_arm64_is_not_allowed() {
        let err = flat("linux", "aarch64").unwrap_err();
        assert!(matches!(err, LauncherError::ArchitectureNotAllowed { .. }));
        assert!(err.to_string().contains("only available for x86_64"));
    }

    #[test]
    fn exec_bit_required_everywhere_but_windows() {
        assert!(!flat("windows", "x86_64").unwrap().requires_exec_bit);
        assert!(flat("linux", "x86_64").unwrap().requires_exec_bit);
        assert!(flat("macos", "aarch64").unwrap().requires_exec_bit);
    }

    #[test]
    fn nested_layout_for_every_supported_pair() {
        let d = resolve("linux", "x86_64", Layout::Nested, Path::new("bin"), "aicommit").unwrap();
        assert_eq!(d.path, PathBuf::from("bin/linux-x86_64/aicommit"));
        let d = resolve("windows", "x86_64", Layout::Nested, Path::new("bin"), "aicommit").unwrap();
        assert_eq!(d.path, PathBuf::from("bin/windows-x86_64/aicommit.exe"));
        let d = resolve("macos", "aarch64", Layout::Nested, Path::new("bin"), "aicommit").unwrap();
        assert_eq!(d.path, PathBuf::from("bin/macos-aarch64/aicommit"));
    }
}
