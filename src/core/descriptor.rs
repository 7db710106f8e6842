//! The build descriptor.
//!
//! A descriptor is everything the evaluator needs besides the settings:
//! the pinned dependencies, the build tools, option defaults and the
//! embedded toolchain profile. It is immutable once loaded.

use semver::Version;

use crate::core::dependency::Dependency;
use crate::core::options::PackageOptions;
use crate::core::profile::EmbeddedProfile;

/// Dependencies of the built-in descriptor, in declaration order.
const BUILTIN_REQUIRES: [(&str, &str); 6] = [
    ("sdl", "2.28.3"),
    ("sdl_image", "2.8.2"),
    ("sdl_ttf", "2.24.0"),
    ("libcurl", "8.11.1"),
    ("nlohmann_json", "3.11.3"),
    ("cpp-httplib", "0.18.3"),
];

/// Build tools of the built-in descriptor.
const BUILTIN_TOOL_REQUIRES: [(&str, &str); 1] = [("cmake", "3.27.9")];

/// Name used when no `[package]` section is present.
pub const DEFAULT_PACKAGE_NAME: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    name: String,
    version: Option<Version>,
    requires: Vec<Dependency>,
    tool_requires: Vec<Dependency>,
    options: PackageOptions,
    embedded: EmbeddedProfile,
}

impl Descriptor {
    /// The descriptor used when no Quay.toml is present.
    pub fn builtin() -> Self {
        Descriptor {
            name: DEFAULT_PACKAGE_NAME.to_string(),
            version: None,
            requires: pinned(&BUILTIN_REQUIRES),
            tool_requires: pinned(&BUILTIN_TOOL_REQUIRES),
            options: PackageOptions::default(),
            embedded: EmbeddedProfile::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_version(mut self, version: Option<Version>) -> Self {
        self.version = version;
        self
    }

    pub fn with_requires(mut self, requires: Vec<Dependency>) -> Self {
        self.requires = requires;
        self
    }

    pub fn with_tool_requires(mut self, tool_requires: Vec<Dependency>) -> Self {
        self.tool_requires = tool_requires;
        self
    }

    pub fn with_options(mut self, options: PackageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_embedded(mut self, embedded: EmbeddedProfile) -> Self {
        self.embedded = embedded;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn requires(&self) -> &[Dependency] {
        &self.requires
    }

    pub fn tool_requires(&self) -> &[Dependency] {
        &self.tool_requires
    }

    /// Option defaults before any target-specific adjustment.
    pub fn options(&self) -> &PackageOptions {
        &self.options
    }

    pub fn embedded(&self) -> &EmbeddedProfile {
        &self.embedded
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Descriptor::builtin()
    }
}

fn pinned(entries: &[(&'static str, &'static str)]) -> Vec<Dependency> {
    entries
        .iter()
        .map(|&(name, version)| Dependency::pinned(name, version))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_requires() {
        let descriptor = Descriptor::builtin();
        let refs: Vec<String> = descriptor.requires().iter().map(|d| d.reference()).collect();
        assert_eq!(
            refs,
            vec![
                "sdl/2.28.3",
                "sdl_image/2.8.2",
                "sdl_ttf/2.24.0",
                "libcurl/8.11.1",
                "nlohmann_json/3.11.3",
                "cpp-httplib/0.18.3",
            ]
        );
    }

    #[test]
    fn test_builtin_pins_are_valid() {
        for &(name, version) in BUILTIN_REQUIRES.iter().chain(&BUILTIN_TOOL_REQUIRES) {
            let checked = Dependency::parse(name, version).unwrap();
            assert_eq!(checked, Dependency::pinned(name, version));
        }
        assert_eq!(Descriptor::builtin().requires().len(), BUILTIN_REQUIRES.len());
    }

    #[test]
    fn test_builtin_tool_requires() {
        let descriptor = Descriptor::builtin();
        assert_eq!(descriptor.tool_requires().len(), 1);
        assert_eq!(descriptor.tool_requires()[0].reference(), "cmake/3.27.9");
    }

    #[test]
    fn test_builtin_defaults() {
        let descriptor = Descriptor::default();
        assert_eq!(descriptor.name(), DEFAULT_PACKAGE_NAME);
        assert!(descriptor.version().is_none());
        assert_eq!(descriptor.options(), &PackageOptions::default());
        assert_eq!(descriptor.embedded(), &EmbeddedProfile::default());
    }
}
