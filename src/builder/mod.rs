//! Generator inputs.
//!
//! This module turns an evaluation into the files a CMake build consumes:
//! the toolchain file and the dependency artifact.

pub mod cmake;
pub mod deps;
pub mod toolchain;

pub use deps::DepsArtifact;
pub use toolchain::ToolchainVars;
