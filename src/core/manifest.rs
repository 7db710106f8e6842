//! Quay.toml manifest parsing.
//!
//! Every section is optional. Sections that are present replace the
//! corresponding part of the built-in descriptor:
//!
//! ```toml
//! [package]
//! name = "weather-display"
//! version = "0.1.0"
//!
//! [requires]
//! sdl = "2.28.3"
//!
//! [tool-requires]
//! cmake = "3.27.9"
//!
//! [options.opus]
//! with_neon = true
//!
//! [embedded]
//! sysroot = "/opt/rpi/sysroot"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use miette::{Diagnostic as MietteDiagnostic, NamedSource, SourceSpan};
use semver::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::dependency::Dependency;
use crate::core::descriptor::Descriptor;
use crate::core::errors::ConfigError;
use crate::core::options::PackageOptions;
use crate::core::profile::{EmbeddedOverrides, EmbeddedProfile};

/// Canonical manifest file name.
pub const MANIFEST_NAME: &str = "Quay.toml";

/// TOML syntax or schema error, with the offending span.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to parse manifest: {message}")]
#[diagnostic(
    code(quay::manifest::parse),
    help("Fix the syntax error in Quay.toml and re-run the command")
)]
pub struct ManifestParseError {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

/// Package metadata from [package] section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageMetadata {
    /// Package name
    pub name: String,

    /// Package version (semver)
    #[serde(default)]
    pub version: Option<String>,
}

impl PackageMetadata {
    /// Parse the version string as semver.
    pub fn version(&self) -> Result<Option<Version>, ConfigError> {
        self.version
            .as_deref()
            .map(|v| {
                Version::parse(v).map_err(|e| ConfigError::InvalidVersion {
                    package: self.name.clone(),
                    version: v.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }
}

/// Raw manifest as deserialized from TOML.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    package: Option<PackageMetadata>,

    #[serde(default)]
    requires: Option<toml::Table>,

    #[serde(default)]
    tool_requires: Option<toml::Table>,

    #[serde(default)]
    options: toml::Table,

    #[serde(default)]
    embedded: EmbeddedOverrides,
}

/// A loaded Quay.toml.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Package metadata, if declared
    pub package: Option<PackageMetadata>,

    /// The descriptor this manifest describes
    pub descriptor: Descriptor,

    /// Path of the manifest file
    pub path: PathBuf,
}

impl Manifest {
    /// Load and validate a manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::ManifestNotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&contents, path)
    }

    /// Parse manifest text. `path` is used for error reporting only.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest = toml::from_str(contents).map_err(|e| ManifestParseError {
            message: e.message().to_string(),
            src: NamedSource::new(path.display().to_string(), contents.to_string()),
            span: e.span().map(SourceSpan::from),
        })?;

        let descriptor = raw
            .to_descriptor()
            .with_context(|| format!("invalid manifest: {}", path.display()))?;

        tracing::debug!(
            "Loaded manifest {} ({} requires, {} tool requires)",
            path.display(),
            descriptor.requires().len(),
            descriptor.tool_requires().len()
        );

        Ok(Manifest {
            package: raw.package,
            descriptor,
            path: path.to_path_buf(),
        })
    }

    /// Directory containing the manifest.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl RawManifest {
    fn to_descriptor(&self) -> Result<Descriptor, ConfigError> {
        let mut descriptor = Descriptor::builtin();

        if let Some(ref package) = self.package {
            descriptor = descriptor
                .with_name(package.name.clone())
                .with_version(package.version()?);
        }

        if let Some(ref requires) = self.requires {
            descriptor = descriptor.with_requires(parse_pins(requires)?);
        }

        if let Some(ref tool_requires) = self.tool_requires {
            descriptor = descriptor.with_tool_requires(parse_pins(tool_requires)?);
        }

        descriptor = descriptor.with_options(parse_options(&self.options)?);

        if matches!(self.embedded.find_root.as_deref(), Some([])) {
            return Err(ConfigError::EmptyFindRoot);
        }

        if !self.embedded.is_empty() {
            descriptor =
                descriptor.with_embedded(EmbeddedProfile::default().with_overrides(&self.embedded));
        }

        Ok(descriptor)
    }
}

fn parse_pins(table: &toml::Table) -> Result<Vec<Dependency>, ConfigError> {
    table
        .iter()
        .map(|(name, value)| match value.as_str() {
            Some(version) => Dependency::parse(name, version),
            None => Err(ConfigError::InvalidVersion {
                package: name.clone(),
                version: value.to_string(),
                reason: "expected a version string".to_string(),
            }),
        })
        .collect()
}

fn parse_options(table: &toml::Table) -> Result<PackageOptions, ConfigError> {
    let mut options = PackageOptions::default();

    for (package, toggles) in table {
        let Some(toggles) = toggles.as_table() else {
            return Err(ConfigError::InvalidOptionAssignment(format!(
                "options.{} = {}",
                package, toggles
            )));
        };

        for (option, value) in toggles {
            let value = value.as_bool().ok_or_else(|| ConfigError::InvalidOptionValue {
                package: package.clone(),
                option: option.clone(),
                value: value.to_string(),
            })?;
            options.set(package, option, value)?;
        }
    }

    Ok(options)
}

/// Render a descriptor as Quay.toml text.
pub fn render(descriptor: &Descriptor) -> Result<String> {
    let mut doc = toml::Table::new();

    let mut package = toml::Table::new();
    package.insert("name".into(), descriptor.name().into());
    let version = descriptor
        .version()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "0.1.0".to_string());
    package.insert("version".into(), version.into());
    doc.insert("package".into(), package.into());

    doc.insert("requires".into(), pins_table(descriptor.requires()).into());
    doc.insert(
        "tool-requires".into(),
        pins_table(descriptor.tool_requires()).into(),
    );

    let mut options = toml::Table::new();
    for (pkg, option, value) in descriptor.options().entries() {
        let entry = options
            .entry(pkg.to_string())
            .or_insert_with(|| toml::Table::new().into());
        if let Some(table) = entry.as_table_mut() {
            table.insert(option.to_string(), value.into());
        }
    }
    doc.insert("options".into(), options.into());

    let mut out = toml::to_string_pretty(&doc).context("failed to serialize manifest")?;

    let embedded = descriptor.embedded();
    out.push_str("\n# Overrides for the armv7hf cross toolchain.\n");
    out.push_str("# [embedded]\n");
    out.push_str(&format!("# cc = \"{}\"\n", embedded.cc.display()));
    out.push_str(&format!("# cxx = \"{}\"\n", embedded.cxx.display()));
    out.push_str(&format!("# sysroot = \"{}\"\n", embedded.sysroot.display()));
    out.push_str(&format!("# cpu-flags = \"{}\"\n", embedded.cpu_flags));

    Ok(out)
}

fn pins_table(deps: &[Dependency]) -> toml::Table {
    deps.iter()
        .map(|d| (d.name().to_string(), d.version().to_string().into()))
        .collect()
}
