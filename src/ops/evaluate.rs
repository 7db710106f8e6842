//! Descriptor evaluation.
//!
//! `evaluate` is pure: the same descriptor, settings and overrides always
//! produce the same [`Evaluation`].

use crate::builder::toolchain::ToolchainVars;
use crate::core::dependency::Dependency;
use crate::core::descriptor::Descriptor;
use crate::core::errors::ConfigError;
use crate::core::options::{OptionAssignment, PackageOptions};
use crate::core::profile::ArchitectureProfile;
use crate::core::settings::{compiler_family, detect_compiler, Arch, BuildType, Settings};
use crate::util::config::Config;

/// Result of evaluating a descriptor for one set of settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub package: String,
    pub settings: Settings,
    pub profile: ArchitectureProfile,
    pub toolchain: ToolchainVars,
    pub requires: Vec<Dependency>,
    pub tool_requires: Vec<Dependency>,
    pub options: PackageOptions,
}

impl Evaluation {
    pub fn is_embedded(&self) -> bool {
        self.profile.is_embedded()
    }
}

/// Resolve settings from explicit values, falling back to configuration
/// and then to the host.
///
/// `arch` and `build_type` already include environment overrides when they
/// come from the command line.
pub fn resolve_settings(
    descriptor: &Descriptor,
    config: &Config,
    arch: Option<&str>,
    build_type: Option<&str>,
) -> Result<Settings, ConfigError> {
    let arch = arch
        .or(config.settings.arch.as_deref())
        .map(Arch::new)
        .unwrap_or_else(Arch::host);

    let build_type = match build_type.or(config.settings.build_type.as_deref()) {
        Some(s) => s.parse()?,
        None => BuildType::default(),
    };

    let compiler = if arch.is_embedded() {
        descriptor
            .embedded()
            .cc
            .file_stem()
            .and_then(|s| s.to_str())
            .map(compiler_family)
    } else {
        detect_compiler()
    };

    Ok(Settings::new(arch)
        .with_build_type(build_type)
        .with_compiler(compiler))
}

/// Evaluate `descriptor` under `settings`.
///
/// Options are resolved in three layers: descriptor defaults, then the
/// toggles forced by the embedded target, then explicit `overrides`.
pub fn evaluate(
    descriptor: &Descriptor,
    settings: &Settings,
    overrides: &[OptionAssignment],
) -> Result<Evaluation, ConfigError> {
    let profile = ArchitectureProfile::select(&settings.arch, descriptor.embedded());
    let toolchain = ToolchainVars::for_profile(&profile);

    let mut options = *descriptor.options();
    if profile.is_embedded() {
        options.apply_embedded();
    }
    for assignment in overrides {
        options.apply(assignment)?;
    }

    tracing::debug!(
        "Evaluated `{}` for {} ({}): {} toolchain variables",
        descriptor.name(),
        settings.arch,
        if profile.is_embedded() { "embedded" } else { "host" },
        toolchain.len()
    );

    Ok(Evaluation {
        package: descriptor.name().to_string(),
        settings: settings.clone(),
        profile,
        toolchain,
        requires: descriptor.requires().to_vec(),
        tool_requires: descriptor.tool_requires().to_vec(),
        options,
    })
}
