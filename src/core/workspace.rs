//! Workspace - the descriptor together with where it came from.
//!
//! A workspace is rooted at the directory holding Quay.toml. When no
//! manifest exists the built-in descriptor is used and the working
//! directory becomes the root.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::descriptor::Descriptor;
use crate::core::manifest::Manifest;
use crate::core::settings::{BuildType, Settings};
use crate::util::GlobalContext;

/// Build output directory under the workspace root.
pub const BUILD_DIR: &str = "build";

/// Generator output directory under each build-type directory.
pub const GENERATORS_DIR: &str = "generators";

#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    manifest: Option<Manifest>,
    descriptor: Descriptor,
}

impl Workspace {
    /// Load the workspace.
    ///
    /// An explicit `manifest_path` must exist; otherwise Quay.toml is
    /// searched upward from the working directory.
    pub fn load(ctx: &GlobalContext, manifest_path: Option<&Path>) -> Result<Self> {
        let path = match manifest_path {
            Some(path) => Some(ctx.cwd().join(path)),
            None => ctx.find_manifest(),
        };

        match path {
            Some(path) => {
                let manifest = Manifest::load(&path)?;
                Ok(Workspace::from_manifest(manifest))
            }
            None => {
                tracing::debug!("No Quay.toml found; using built-in descriptor");
                Ok(Workspace::builtin(ctx.cwd().to_path_buf()))
            }
        }
    }

    pub fn from_manifest(manifest: Manifest) -> Self {
        Workspace {
            root: manifest.root().to_path_buf(),
            descriptor: manifest.descriptor.clone(),
            manifest: Some(manifest),
        }
    }

    pub fn builtin(root: PathBuf) -> Self {
        Workspace {
            root,
            manifest: None,
            descriptor: Descriptor::builtin(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn is_builtin(&self) -> bool {
        self.manifest.is_none()
    }

    /// Generator output directory for a build type: `build/<BuildType>/generators`.
    pub fn generators_dir(&self, build_type: BuildType) -> PathBuf {
        self.root
            .join(BUILD_DIR)
            .join(build_type.as_str())
            .join(GENERATORS_DIR)
    }

    /// Resolve the output directory for `settings`, honouring an override
    /// relative to the workspace root.
    pub fn output_dir(&self, settings: &Settings, override_dir: Option<&Path>) -> PathBuf {
        match override_dir {
            Some(dir) => self.root.join(dir),
            None => self.generators_dir(settings.build_type),
        }
    }
}
