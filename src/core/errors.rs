//! Descriptor configuration errors and diagnostics.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error in a build descriptor or in the settings applied to it.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ConfigError {
    #[error("invalid package reference `{0}`")]
    #[diagnostic(
        code(quay::config::invalid_reference),
        help("References have the form `name/version`, e.g. `sdl/2.28.3`")
    )]
    InvalidReference(String),

    #[error("invalid version `{version}` for `{package}`: {reason}")]
    #[diagnostic(code(quay::config::invalid_version))]
    InvalidVersion {
        package: String,
        version: String,
        reason: String,
    },

    #[error("invalid package name `{0}`")]
    #[diagnostic(code(quay::config::invalid_name))]
    InvalidPackageName(String),

    #[error("no configurable options for package `{package}`")]
    #[diagnostic(code(quay::options::unknown_package))]
    UnknownOptionPackage { package: String, known: Vec<String> },

    #[error("unknown option `{option}` for package `{package}`")]
    #[diagnostic(code(quay::options::unknown_option))]
    UnknownOption {
        package: String,
        option: String,
        known: Vec<String>,
    },

    #[error("option `{package}:{option}` expects a boolean, found `{value}`")]
    #[diagnostic(code(quay::options::invalid_value))]
    InvalidOptionValue {
        package: String,
        option: String,
        value: String,
    },

    #[error("invalid option assignment `{0}`")]
    #[diagnostic(
        code(quay::options::invalid_assignment),
        help("Options are written as `package:option=value`, e.g. `opus:with_neon=true`")
    )]
    InvalidOptionAssignment(String),

    #[error("invalid build type `{0}`")]
    #[diagnostic(
        code(quay::settings::invalid_build_type),
        help("Expected one of: Debug, Release, RelWithDebInfo, MinSizeRel")
    )]
    InvalidBuildType(String),

    #[error("`find-root` under [embedded] is empty")]
    #[diagnostic(
        code(quay::manifest::empty_find_root),
        help("List at least one search root, or remove `find-root` to keep the defaults")
    )]
    EmptyFindRoot,

    #[error("manifest not found at {}", .0.display())]
    #[diagnostic(code(quay::manifest::not_found))]
    ManifestNotFound(PathBuf),

    #[error("{} already exists", .0.display())]
    #[diagnostic(code(quay::manifest::exists))]
    ManifestExists(PathBuf),
}

impl ConfigError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());

        match self {
            ConfigError::InvalidReference(_) => {
                diag.with_suggestion("Write references as `name/version`, e.g. `sdl/2.28.3`")
            }

            ConfigError::InvalidVersion { package, .. } => diag
                .with_context("versions are non-empty and contain no `/`, `@` or whitespace")
                .with_suggestion(format!("Pin `{}` to an exact version, e.g. `1.3` or `1.1.1w`", package)),

            ConfigError::InvalidPackageName(_) => diag.with_context(
                "package names use lowercase letters, digits and `_`, `-`, `.`, `+`",
            ),

            ConfigError::UnknownOptionPackage { known, .. } => {
                let diag = diag.with_context(format!("configurable packages: {}", known.join(", ")));
                diag.with_suggestion("Remove the option or configure one of the packages above")
            }

            ConfigError::UnknownOption {
                package, known, ..
            } => diag
                .with_context(format!("`{}` accepts: {}", package, known.join(", ")))
                .with_suggestion("Check the option name for typos"),

            ConfigError::InvalidOptionValue { .. } => {
                diag.with_suggestion("Use `true` or `false`")
            }

            ConfigError::InvalidOptionAssignment(_) => {
                diag.with_suggestion("Write options as `package:option=value`")
            }

            ConfigError::InvalidBuildType(_) => diag.with_context(
                "expected one of: Debug, Release, RelWithDebInfo, MinSizeRel",
            ),

            ConfigError::EmptyFindRoot => diag.with_suggestion(
                "List at least one search root, or remove `find-root` to keep the defaults",
            ),

            ConfigError::ManifestNotFound(path) => diag
                .with_location(path)
                .with_suggestion(suggestions::NO_MANIFEST),

            ConfigError::ManifestExists(path) => diag.with_location(path),
        }
    }
}
