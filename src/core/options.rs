//! Per-package feature toggles.
//!
//! Every recognized toggle is declared here with its default. Setting a
//! toggle that is not declared fails with [`ConfigError::UnknownOption`];
//! nothing is silently ignored.

use std::str::FromStr;

use serde::Serialize;

use crate::core::errors::ConfigError;

/// Toggles for the `opus` codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpusOptions {
    /// Use hand-written assembly kernels
    pub with_asm: bool,
    /// Use NEON SIMD extensions
    pub with_neon: bool,
}

impl OpusOptions {
    const NAMES: &'static [&'static str] = &["with_asm", "with_neon"];

    fn slot(&mut self, option: &str) -> Option<&mut bool> {
        match option {
            "with_asm" => Some(&mut self.with_asm),
            "with_neon" => Some(&mut self.with_neon),
            _ => None,
        }
    }
}

/// All configurable package options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PackageOptions {
    pub opus: OpusOptions,
}

impl PackageOptions {
    /// Packages that expose options.
    pub const PACKAGES: &'static [&'static str] = &["opus"];

    /// Set a single toggle.
    pub fn set(&mut self, package: &str, option: &str, value: bool) -> Result<(), ConfigError> {
        let (slot, known) = match package {
            "opus" => (self.opus.slot(option), OpusOptions::NAMES),
            _ => {
                return Err(ConfigError::UnknownOptionPackage {
                    package: package.to_string(),
                    known: Self::PACKAGES.iter().map(|s| s.to_string()).collect(),
                })
            }
        };

        match slot {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ConfigError::UnknownOption {
                package: package.to_string(),
                option: option.to_string(),
                known: known.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    /// Apply a parsed assignment.
    pub fn apply(&mut self, assignment: &OptionAssignment) -> Result<(), ConfigError> {
        self.set(&assignment.package, &assignment.option, assignment.value)
    }

    /// Force the toggles the embedded target requires.
    pub fn apply_embedded(&mut self) {
        self.opus.with_asm = true;
        self.opus.with_neon = true;
    }

    /// Flatten into `(package, option, value)` rows in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str, bool)> {
        vec![
            ("opus", "with_asm", self.opus.with_asm),
            ("opus", "with_neon", self.opus.with_neon),
        ]
    }
}

/// A `package:option=value` assignment, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAssignment {
    pub package: String,
    pub option: String,
    pub value: bool,
}

impl FromStr for OptionAssignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidOptionAssignment(s.to_string());

        let (target, value) = s.split_once('=').ok_or_else(invalid)?;
        let (package, option) = target.split_once(':').ok_or_else(invalid)?;
        let (package, option) = (package.trim(), option.trim());
        if package.is_empty() || option.is_empty() {
            return Err(invalid());
        }

        let value = parse_bool(value.trim()).ok_or_else(|| ConfigError::InvalidOptionValue {
            package: package.to_string(),
            option: option.to_string(),
            value: value.trim().to_string(),
        })?;

        Ok(OptionAssignment {
            package: package.to_string(),
            option: option.to_string(),
            value,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
