//! Dependency artifact for the build-file generator.
//!
//! The artifact lists the pinned requirements together with the settings
//! and resolved options the resolver needs to pick matching binaries.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::dependency::Dependency;
use crate::core::options::PackageOptions;
use crate::core::settings::Settings;
use crate::ops::evaluate::Evaluation;

/// File name of the generated artifact.
pub const DEPS_FILE: &str = "quay_deps.json";

/// Format version of the artifact.
pub const DEPS_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct DepsArtifact<'a> {
    pub version: u32,
    pub package: &'a str,
    pub settings: &'a Settings,
    pub requires: Vec<DepEntry<'a>>,
    pub tool_requires: Vec<DepEntry<'a>>,
    pub options: BTreeMap<&'static str, BTreeMap<&'static str, bool>>,
}

#[derive(Debug, Serialize)]
pub struct DepEntry<'a> {
    pub name: &'a str,
    pub version: String,
    pub reference: String,
}

impl<'a> DepsArtifact<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        DepsArtifact {
            version: DEPS_FORMAT_VERSION,
            package: &evaluation.package,
            settings: &evaluation.settings,
            requires: entries(&evaluation.requires),
            tool_requires: entries(&evaluation.tool_requires),
            options: options_table(&evaluation.options),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize dependency artifact")
    }
}

fn entries(deps: &[Dependency]) -> Vec<DepEntry<'_>> {
    deps.iter()
        .map(|d| DepEntry {
            name: d.name(),
            version: d.version().to_string(),
            reference: d.reference(),
        })
        .collect()
}

fn options_table(options: &PackageOptions) -> BTreeMap<&'static str, BTreeMap<&'static str, bool>> {
    let mut table: BTreeMap<&'static str, BTreeMap<&'static str, bool>> = BTreeMap::new();
    for (package, option, value) in options.entries() {
        table.entry(package).or_default().insert(option, value);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor::Descriptor;
    use crate::core::settings::{Arch, BuildType};
    use crate::ops::evaluate::evaluate;

    fn artifact_json(arch: &str) -> serde_json::Value {
        let settings = Settings::new(Arch::new(arch)).with_build_type(BuildType::Debug);
        let evaluation = evaluate(&Descriptor::builtin(), &settings, &[]).unwrap();
        let json = DepsArtifact::new(&evaluation).to_json().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_artifact_contents() {
        let json = artifact_json("x86_64");
        assert_eq!(json["version"], 1);
        assert_eq!(json["package"], "app");
        assert_eq!(json["settings"]["arch"], "x86_64");
        assert_eq!(json["settings"]["build_type"], "Debug");

        let requires = json["requires"].as_array().unwrap();
        assert_eq!(requires.len(), 6);
        assert_eq!(requires[0]["name"], "sdl");
        assert_eq!(requires[0]["reference"], "sdl/2.28.3");
        assert_eq!(json["tool_requires"][0]["reference"], "cmake/3.27.9");
        assert_eq!(json["options"]["opus"]["with_neon"], false);
    }

    #[test]
    fn test_embedded_options_in_artifact() {
        let json = artifact_json("armv7hf");
        assert_eq!(json["options"]["opus"]["with_asm"], true);
        assert_eq!(json["options"]["opus"]["with_neon"], true);
        assert_eq!(json["requires"], artifact_json("x86_64")["requires"]);
    }
}
