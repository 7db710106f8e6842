//! Toolchain variable set.
//!
//! The set is derived from an [`ArchitectureProfile`] and handed to the
//! build-file generator. The host profile yields an empty set.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::profile::ArchitectureProfile;

/// CMake variable names emitted for a cross build.
pub mod vars {
    pub const C_COMPILER: &str = "CMAKE_C_COMPILER";
    pub const CXX_COMPILER: &str = "CMAKE_CXX_COMPILER";
    pub const FIND_ROOT_PATH: &str = "CMAKE_FIND_ROOT_PATH";
    pub const SYSROOT: &str = "CMAKE_SYSROOT";
    pub const C_FLAGS: &str = "CMAKE_C_FLAGS";
    pub const CXX_FLAGS: &str = "CMAKE_CXX_FLAGS";
    pub const MODE_PROGRAM: &str = "CMAKE_FIND_ROOT_PATH_MODE_PROGRAM";
    pub const MODE_LIBRARY: &str = "CMAKE_FIND_ROOT_PATH_MODE_LIBRARY";
    pub const MODE_INCLUDE: &str = "CMAKE_FIND_ROOT_PATH_MODE_INCLUDE";
    pub const MODE_PACKAGE: &str = "CMAKE_FIND_ROOT_PATH_MODE_PACKAGE";
}

/// Mapping from toolchain variable name to value, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolchainVars(BTreeMap<String, String>);

impl ToolchainVars {
    /// Derive the variables for a profile.
    pub fn for_profile(profile: &ArchitectureProfile) -> Self {
        let mut out = ToolchainVars::default();

        let ArchitectureProfile::Embedded(embedded) = profile else {
            return out;
        };

        out.set(vars::C_COMPILER, embedded.cc.display().to_string());
        out.set(vars::CXX_COMPILER, embedded.cxx.display().to_string());
        out.set(vars::FIND_ROOT_PATH, embedded.find_root_list());
        out.set(vars::SYSROOT, embedded.sysroot.display().to_string());
        out.set(vars::C_FLAGS, embedded.cpu_flags.clone());
        out.set(vars::CXX_FLAGS, embedded.cpu_flags.clone());
        out.set(vars::MODE_PROGRAM, embedded.search.program.as_str());
        out.set(vars::MODE_LIBRARY, embedded.search.library.as_str());
        out.set(vars::MODE_INCLUDE, embedded.search.include.as_str());
        out.set(vars::MODE_PACKAGE, embedded.search.package.as_str());

        out
    }

    fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
