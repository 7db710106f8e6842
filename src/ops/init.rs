//! Create a Quay.toml for a project.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::descriptor::Descriptor;
use crate::core::errors::ConfigError;
use crate::core::manifest::{render, MANIFEST_NAME};
use crate::util::fs::write_string;

/// Options for creating a manifest.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project directory
    pub path: PathBuf,
    /// Package name (defaults to the directory name)
    pub name: Option<String>,
}

/// Write a Quay.toml holding the built-in descriptor.
pub fn init(opts: &InitOptions) -> Result<PathBuf> {
    let manifest_path = opts.path.join(MANIFEST_NAME);
    if manifest_path.exists() {
        return Err(ConfigError::ManifestExists(manifest_path).into());
    }

    let name = opts
        .name
        .clone()
        .or_else(|| dir_name(&opts.path))
        .unwrap_or_else(|| Descriptor::builtin().name().to_string());

    let descriptor = Descriptor::builtin().with_name(name);
    write_string(&manifest_path, &render(&descriptor)?)?;

    tracing::info!("Created {}", manifest_path.display());
    Ok(manifest_path)
}

fn dir_name(path: &Path) -> Option<String> {
    let path = path.canonicalize().ok()?;
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::Manifest;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_manifest() {
        let tmp = TempDir::new().unwrap();
        let path = init(&InitOptions {
            path: tmp.path().to_path_buf(),
            name: Some("weather".to_string()),
        })
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.descriptor.name(), "weather");
        assert_eq!(
            manifest.descriptor.requires(),
            Descriptor::builtin().requires()
        );
    }

    #[test]
    fn test_init_defaults_name_to_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("snowglobe");
        std::fs::create_dir(&dir).unwrap();

        let path = init(&InitOptions {
            path: dir,
            name: None,
        })
        .unwrap();
        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.descriptor.name(), "snowglobe");
    }

    #[test]
    fn test_init_refuses_existing_manifest() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(MANIFEST_NAME), "").unwrap();

        let err = init(&InitOptions {
            path: tmp.path().to_path_buf(),
            name: None,
        })
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ManifestExists(_))
        ));
    }
}
