//! Directory conventions for packaged binaries.
//!
//! Exactly one layout is active per deployment. The default is fixed at build
//! time by Cargo features; configuration may override it explicitly.
//!
//! - `Flat`:      `<bin_dir>/<product>-<platform>-<arch>[.exe]`
//! - `Nested`:    `<bin_dir>/<platform>-<arch>/<product>[.exe]`
//! - `Canonical`: `<bin_dir>/<product>[.exe]`, renamed from the flat name on first run

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::resolve::{ArchKey, PlatformKey};

#[cfg(all(feature = "layout-nested", feature = "layout-canonical"))]
compile_error!("features `layout-nested` and `layout-canonical` are mutually exclusive");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Flat,
    Nested,
    Canonical,
}

impl Layout {
    /// Layout selected when the crate was built.
    pub const fn build_default() -> Self {
        if cfg!(feature = "layout-nested") {
            Layout::Nested
        } else if cfg!(feature = "layout-canonical") {
            Layout::Canonical
        } else {
            Layout::Flat
        }
    }

    /// Parse a layout name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Some(Layout::Flat),
            "nested" => Some(Layout::Nested),
            "canonical" => Some(Layout::Canonical),
            _ => None,
        }
    }

    /// Expected location of the binary under `bin_dir`.
    pub fn binary_path(
        self,
        bin_dir: &Path,
        product: &str,
        platform: PlatformKey,
        arch: ArchKey,
    ) -> PathBuf {
        match self {
            Layout::Flat => bin_dir.join(flat_file_name(product, platform, arch)),
            Layout::Nested => bin_dir
                .join(format!("{}-{}", platform.token(), arch.token()))
                .join(format!("{}{}", product, platform.exe_suffix())),
            Layout::Canonical => bin_dir.join(format!("{}{}", product, platform.exe_suffix())),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::build_default()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Layout::Flat => "flat",
            Layout::Nested => "nested",
            Layout::Canonical => "canonical",
        };
        f.write_str(s)
    }
}

impl FromStr for Layout {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid layout: '{s}' (expected flat, nested or canonical)"))
    }
}

/// `<product>-<platform>-<arch>[.exe]`
pub fn flat_file_name(product: &str, platform: PlatformKey, arch: ArchKey) -> String {
    format!(
        "{}-{}-{}{}",
        product,
        platform.token(),
        arch.token(),
        platform.exe_suffix()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Layout::parse("Nested"), Some(Layout::Nested));
        assert_eq!(Layout::parse(" flat "), Some(Layout::Flat));
        assert_eq!(Layout::parse("CANONICAL"), Some(Layout::Canonical));
        assert_eq!(Layout::parse("mixed"), None);
    }

    #[test]
    fn nested_path_uses_platform_arch_directory() {
        let p = Layout::Nested.binary_path(
            Path::new("/pkg/bin"),
            "aicommit",
            PlatformKey::Windows,
            ArchKey::Aarch64,
        );
        assert_eq!(p, Path::new("/pkg/bin/windows-aarch64/aicommit.exe"));
    }

    #[test]
    fn canonical_path_drops_platform_tokens() {
        let p = Layout::Canonical.binary_path(
            Path::new("/pkg/bin"),
            "aicommit",
            PlatformKey::MacOs,
            ArchKey::X86_64,
        );
        assert_eq!(p, Path::new("/pkg/bin/aicommit"));
    }

    #[test]
    fn default_layout_without_features_is_flat() {
        if !cfg!(feature = "layout-nested") && !cfg!(feature = "layout-canonical") {
            assert_eq!(Layout::default(), Layout::Flat);
        }
    }
}
