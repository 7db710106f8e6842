//! Architecture profiles.
//!
//! A profile is selected by exact match of the target architecture against
//! the embedded identifier. Every other architecture maps to [`ArchitectureProfile::Host`],
//! which contributes no toolchain variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::settings::Arch;

/// Default cross C compiler for the embedded target.
pub const DEFAULT_CC: &str = "/usr/bin/arm-linux-gnueabihf-gcc";
/// Default cross C++ compiler for the embedded target.
pub const DEFAULT_CXX: &str = "/usr/bin/arm-linux-gnueabihf-g++";
/// Default sysroot for the embedded target.
pub const DEFAULT_SYSROOT: &str = "/usr/arm-linux-gnueabihf";
/// Default search roots, in order.
pub const DEFAULT_FIND_ROOT: [&str; 3] = [
    "/usr/arm-linux-gnueabihf",
    "/usr/lib/arm-linux-gnueabihf",
    "/usr/include/arm-linux-gnueabihf",
];
/// CPU/FPU flags for a Cortex-A7 with NEON and hard-float ABI.
pub const DEFAULT_CPU_FLAGS: &str = "-mcpu=cortex-a7 -mfpu=neon-vfpv4 -mfloat-abi=hard";

/// How CMake's `find_*` commands use the find root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchMode {
    /// Search only the host paths.
    Never,
    /// Search only under the find root.
    Only,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Never => "NEVER",
            SearchMode::Only => "ONLY",
        }
    }
}

/// Search policy per `find_*` category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchPolicy {
    pub program: SearchMode,
    pub library: SearchMode,
    pub include: SearchMode,
    pub package: SearchMode,
}

impl SearchPolicy {
    /// Programs come from the host; libraries, headers and packages only from the sysroot.
    pub const fn cross() -> Self {
        SearchPolicy {
            program: SearchMode::Never,
            library: SearchMode::Only,
            include: SearchMode::Only,
            package: SearchMode::Only,
        }
    }
}

/// Cross-compilation settings for the embedded target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedProfile {
    pub cc: PathBuf,
    pub cxx: PathBuf,
    pub sysroot: PathBuf,
    pub find_root: Vec<PathBuf>,
    /// Applied identically to C and C++
    pub cpu_flags: String,
    pub search: SearchPolicy,
}

impl Default for EmbeddedProfile {
    fn default() -> Self {
        EmbeddedProfile {
            cc: PathBuf::from(DEFAULT_CC),
            cxx: PathBuf::from(DEFAULT_CXX),
            sysroot: PathBuf::from(DEFAULT_SYSROOT),
            find_root: DEFAULT_FIND_ROOT.iter().map(PathBuf::from).collect(),
            cpu_flags: DEFAULT_CPU_FLAGS.to_string(),
            search: SearchPolicy::cross(),
        }
    }
}

impl EmbeddedProfile {
    /// Apply overrides from a manifest's `[embedded]` table.
    pub fn with_overrides(mut self, overrides: &EmbeddedOverrides) -> Self {
        if let Some(ref cc) = overrides.cc {
            self.cc = cc.clone();
        }
        if let Some(ref cxx) = overrides.cxx {
            self.cxx = cxx.clone();
        }
        if let Some(ref sysroot) = overrides.sysroot {
            self.sysroot = sysroot.clone();
        }
        if let Some(ref find_root) = overrides.find_root {
            self.find_root = find_root.clone();
        }
        if let Some(ref cpu_flags) = overrides.cpu_flags {
            self.cpu_flags = cpu_flags.clone();
        }
        self
    }

    /// Search roots joined with `;` as CMake lists are.
    pub fn find_root_list(&self) -> String {
        self.find_root
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// `[embedded]` section of Quay.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EmbeddedOverrides {
    pub cc: Option<PathBuf>,
    pub cxx: Option<PathBuf>,
    pub sysroot: Option<PathBuf>,
    pub find_root: Option<Vec<PathBuf>>,
    pub cpu_flags: Option<String>,
}

impl EmbeddedOverrides {
    pub fn is_empty(&self) -> bool {
        *self == EmbeddedOverrides::default()
    }
}

/// Toolchain profile for an architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchitectureProfile {
    /// Native build; no variables injected.
    Host,
    /// Cross build for the embedded target.
    Embedded(EmbeddedProfile),
}

impl ArchitectureProfile {
    /// Select the profile for `arch`.
    pub fn select(arch: &Arch, embedded: &EmbeddedProfile) -> Self {
        if arch.is_embedded() {
            ArchitectureProfile::Embedded(embedded.clone())
        } else {
            ArchitectureProfile::Host
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, ArchitectureProfile::Embedded(_))
    }

    pub fn embedded(&self) -> Option<&EmbeddedProfile> {
        match self {
            ArchitectureProfile::Host => None,
            ArchitectureProfile::Embedded(profile) => Some(profile),
        }
    }
}
