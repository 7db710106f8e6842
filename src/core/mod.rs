//! Core data structures for Quay.
//!
//! This module contains the foundational types used throughout Quay:
//! - Dependencies and the descriptor that lists them
//! - Settings, architecture profiles and package options
//! - Manifest parsing and workspace discovery

pub mod dependency;
pub mod descriptor;
pub mod errors;
pub mod manifest;
pub mod options;
pub mod profile;
pub mod settings;
pub mod workspace;

pub use dependency::Dependency;
pub use descriptor::Descriptor;
pub use errors::ConfigError;
pub use manifest::{Manifest, MANIFEST_NAME};
pub use options::{OptionAssignment, PackageOptions};
pub use profile::{ArchitectureProfile, EmbeddedProfile};
pub use settings::{Arch, BuildType, Settings};
pub use workspace::Workspace;
