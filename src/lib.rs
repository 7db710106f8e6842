//! Quay - a build descriptor evaluator for host and embedded targets
//!
//! This crate loads a build descriptor (pinned dependencies, build tools,
//! package options and the embedded toolchain profile), evaluates it for a
//! target architecture, and writes the inputs a CMake build needs.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

pub use core::{
    dependency::Dependency, descriptor::Descriptor, manifest::Manifest, settings::Settings,
    workspace::Workspace,
};

pub use builder::toolchain::ToolchainVars;
pub use ops::evaluate::{evaluate, Evaluation};
pub use util::context::GlobalContext;
