//! Dependency declarations.
//!
//! A Dependency is a pinned `(name, version)` pair. The descriptor holds a
//! flat list of them; there are no relationships between entries.
//!
//! Versions are opaque package-manager versions (`1.3`, `1.1.1w`, `9e`).
//! [`Dependency::semver`] gives a typed view when the pin happens to be a
//! full semantic version.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::Serialize;

use crate::core::errors::ConfigError;

/// A pinned dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    /// Package name
    name: String,

    /// Exact version, as written
    version: String,
}

impl Dependency {
    /// Create a dependency from a name and a version string, validating both.
    pub fn parse(name: &str, version: &str) -> Result<Self, ConfigError> {
        validate_name(name)?;
        validate_version(name, version)?;
        Ok(Dependency {
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    /// A pin known valid at compile time.
    pub(crate) fn pinned(name: &'static str, version: &'static str) -> Self {
        Dependency {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the pinned version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The version as semver, if it is one.
    pub fn semver(&self) -> Option<Version> {
        Version::parse(&self.version).ok()
    }

    /// Get the package reference (`name/version`).
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl FromStr for Dependency {
    type Err = ConfigError;

    /// Parse a `name/version` reference.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, version) = s
            .split_once('/')
            .ok_or_else(|| ConfigError::InvalidReference(s.to_string()))?;
        if version.contains('/') {
            return Err(ConfigError::InvalidReference(s.to_string()));
        }
        Dependency::parse(name.trim(), version.trim())
    }
}

fn validate_name(name: &str) -> Result<(), ConfigError> {
    let valid_char =
        |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.' | '+');

    if name.is_empty() || !name.chars().all(valid_char) {
        return Err(ConfigError::InvalidPackageName(name.to_string()));
    }
    Ok(())
}

fn validate_version(name: &str, version: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidVersion {
        package: name.to_string(),
        version: version.to_string(),
        reason: reason.to_string(),
    };

    if version.is_empty() {
        return Err(invalid("version is empty"));
    }
    if let Some(c) = version
        .chars()
        .find(|&c| c == '/' || c == '@' || c.is_whitespace())
    {
        return Err(invalid(&format!("unexpected character {:?}", c)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference() {
        let dep: Dependency = "cpp-httplib/0.18.3".parse().unwrap();
        assert_eq!(dep.name(), "cpp-httplib");
        assert_eq!(dep.version(), "0.18.3");
        assert_eq!(dep.semver(), Some(Version::new(0, 18, 3)));
        assert_eq!(dep.reference(), "cpp-httplib/0.18.3");
        assert_eq!(dep.to_string(), dep.reference());
    }

    #[test]
    fn test_reference_requires_slash() {
        let err = "sdl".parse::<Dependency>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidReference(_)));

        let err = "sdl/2.28.3/extra".parse::<Dependency>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidReference(_)));
    }

    #[test]
    fn test_non_semver_versions() {
        for (name, version) in [("zlib", "1.3"), ("openssl", "1.1.1w"), ("libjpeg", "9e")] {
            let dep = Dependency::parse(name, version).unwrap();
            assert_eq!(dep.version(), version);
            assert_eq!(dep.semver(), None);
        }
    }

    #[test]
    fn test_invalid_version() {
        for version in ["", "1.0 beta", "1.0@user/stable", "1.0/2"] {
            let err = Dependency::parse("sdl", version).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidVersion { .. }), "{version:?}");
        }
    }

    #[test]
    fn test_invalid_name() {
        assert!(Dependency::parse("", "1.0.0").is_err());
        assert!(Dependency::parse("SDL", "1.0.0").is_err());
        assert!(Dependency::parse("has space", "1.0.0").is_err());
        assert!(Dependency::parse("nlohmann_json", "3.11.3").is_ok());
    }
}
