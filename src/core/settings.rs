//! Build settings supplied by the invoking environment.
//!
//! Architecture identifiers follow the package-manager naming used for
//! prebuilt binaries (`x86_64`, `armv8`, `armv7hf`, ...) rather than Rust
//! target triples.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::errors::ConfigError;

/// Identifier of the single recognized embedded target.
pub const EMBEDDED_ARCH: &str = "armv7hf";

/// A target architecture identifier.
///
/// Free-form: any string is accepted and compared by exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Arch(String);

impl Arch {
    pub fn new(id: impl Into<String>) -> Self {
        Arch(id.into())
    }

    /// Detect the host architecture.
    pub fn host() -> Self {
        let id = match std::env::consts::ARCH {
            "aarch64" => "armv8",
            "arm" => "armv7",
            "powerpc64" => "ppc64",
            "powerpc64le" => "ppc64le",
            other => other,
        };
        Arch::new(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the embedded target. Case and whitespace matter.
    pub fn is_embedded(&self) -> bool {
        self.0 == EMBEDDED_ARCH
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CMake build type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BuildType {
    Debug,
    #[default]
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildType::Debug),
            "release" => Ok(BuildType::Release),
            "relwithdebinfo" => Ok(BuildType::RelWithDebInfo),
            "minsizerel" => Ok(BuildType::MinSizeRel),
            _ => Err(ConfigError::InvalidBuildType(s.to_string())),
        }
    }
}

/// Settings for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub arch: Arch,
    pub build_type: BuildType,
    /// Host operating system (informational)
    pub os: String,
    /// Host C compiler family (informational)
    pub compiler: Option<String>,
}

impl Settings {
    /// Settings for the given architecture, with host defaults for the rest.
    pub fn new(arch: Arch) -> Self {
        Settings {
            arch,
            build_type: BuildType::default(),
            os: host_os().to_string(),
            compiler: None,
        }
    }

    pub fn with_build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = build_type;
        self
    }

    pub fn with_compiler(mut self, compiler: Option<String>) -> Self {
        self.compiler = compiler;
        self
    }
}

fn host_os() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Macos",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

/// Detect the host C compiler family from `CC` or `PATH`.
pub fn detect_compiler() -> Option<String> {
    let from_env = std::env::var("CC").ok().and_then(|cc| {
        std::path::Path::new(&cc)
            .file_stem()
            .and_then(|s| s.to_str())
            .map(compiler_family)
    });

    from_env.or_else(|| {
        ["gcc", "clang", "cl"]
            .into_iter()
            .find(|name| which::which(name).is_ok())
            .map(compiler_family)
    })
}

/// Map a compiler executable stem to its family name.
pub fn compiler_family(stem: &str) -> String {
    if stem.contains("clang") {
        "clang".to_string()
    } else if stem == "cl" {
        "msvc".to_string()
    } else if stem.contains("gcc") || stem == "cc" {
        "gcc".to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_exact_match() {
        assert!(Arch::new("armv7hf").is_embedded());
        assert!(!Arch::new("ARMV7HF").is_embedded());
        assert!(!Arch::new("armv7hf ").is_embedded());
        assert!(!Arch::new("armv7").is_embedded());
        assert!(!Arch::new("").is_embedded());
    }

    #[test]
    fn test_host_arch_uses_package_names() {
        let host = Arch::host();
        assert!(!host.as_str().is_empty());
        assert_ne!(host.as_str(), "aarch64");
    }

    #[test]
    fn test_build_type_parsing() {
        assert_eq!("Debug".parse::<BuildType>().unwrap(), BuildType::Debug);
        assert_eq!("release".parse::<BuildType>().unwrap(), BuildType::Release);
        assert_eq!(
            "RelWithDebInfo".parse::<BuildType>().unwrap(),
            BuildType::RelWithDebInfo
        );
        assert!("fast".parse::<BuildType>().is_err());
        assert_eq!(BuildType::default(), BuildType::Release);
    }

    #[test]
    fn test_compiler_family() {
        assert_eq!(compiler_family("arm-linux-gnueabihf-gcc"), "gcc");
        assert_eq!(compiler_family("clang-17"), "clang");
        assert_eq!(compiler_family("cl"), "msvc");
        assert_eq!(compiler_family("cc"), "gcc");
    }
}
