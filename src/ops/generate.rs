//! Write generator inputs to disk.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::cmake::{render_toolchain_file, TOOLCHAIN_FILE};
use crate::builder::deps::{DepsArtifact, DEPS_FILE};
use crate::ops::evaluate::Evaluation;
use crate::util::fs::{read_optional, write_string};
use crate::util::hash::Fingerprint;

/// Name of the file holding the fingerprint of the last written outputs.
pub const FINGERPRINT_FILE: &str = ".quay-fingerprint";

/// What `generate` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    /// True when the outputs were already up to date and nothing was written.
    pub fresh: bool,
}

/// Render the toolchain file and dependency artifact into `output_dir`.
///
/// Files are rewritten only when their combined fingerprint changed, so
/// build systems watching them do not reconfigure needlessly.
pub fn generate(evaluation: &Evaluation, output_dir: &Path) -> Result<GenerateOutcome> {
    let outputs = [
        (
            TOOLCHAIN_FILE,
            render_toolchain_file(&evaluation.toolchain, &evaluation.settings),
        ),
        (DEPS_FILE, DepsArtifact::new(evaluation).to_json()?),
    ];

    let mut fp = Fingerprint::new();
    for (name, contents) in &outputs {
        fp.update_file(name, contents);
    }
    let fingerprint = fp.finish();

    let files: Vec<PathBuf> = outputs
        .iter()
        .map(|(name, _)| output_dir.join(name))
        .collect();
    let fingerprint_path = output_dir.join(FINGERPRINT_FILE);

    let previous = read_optional(&fingerprint_path)?;
    let all_present = files.iter().all(|f| f.is_file());
    if all_present && previous.as_deref().map(str::trim) == Some(fingerprint.as_str()) {
        tracing::info!("Generator files in {} are up to date", output_dir.display());
        return Ok(GenerateOutcome {
            output_dir: output_dir.to_path_buf(),
            files,
            fresh: true,
        });
    }

    for ((_, contents), path) in outputs.iter().zip(&files) {
        write_string(path, contents)?;
        tracing::debug!("Wrote {}", path.display());
    }
    write_string(&fingerprint_path, &fingerprint)?;

    tracing::info!(
        "Generated {} files for {} in {}",
        files.len(),
        evaluation.settings.arch,
        output_dir.display()
    );

    Ok(GenerateOutcome {
        output_dir: output_dir.to_path_buf(),
        files,
        fresh: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor::Descriptor;
    use crate::core::settings::{Arch, Settings};
    use crate::ops::evaluate::evaluate;
    use tempfile::TempDir;

    fn evaluation(arch: &str) -> Evaluation {
        evaluate(&Descriptor::builtin(), &Settings::new(Arch::new(arch)), &[]).unwrap()
    }

    #[test]
    fn test_generate_writes_files() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("build/Release/generators");

        let outcome = generate(&evaluation("armv7hf"), &out).unwrap();
        assert!(!outcome.fresh);
        assert_eq!(outcome.files.len(), 2);

        let toolchain = std::fs::read_to_string(out.join(TOOLCHAIN_FILE)).unwrap();
        assert!(toolchain.contains("set(CMAKE_SYSROOT \"/usr/arm-linux-gnueabihf\")"));

        let deps: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join(DEPS_FILE)).unwrap()).unwrap();
        assert_eq!(deps["requires"].as_array().unwrap().len(), 6);
        assert!(out.join(FINGERPRINT_FILE).exists());
    }

    #[test]
    fn test_second_run_is_fresh() {
        let tmp = TempDir::new().unwrap();
        let eval = evaluation("x86_64");

        assert!(!generate(&eval, tmp.path()).unwrap().fresh);
        assert!(generate(&eval, tmp.path()).unwrap().fresh);
    }

    #[test]
    fn test_changed_settings_rewrite() {
        let tmp = TempDir::new().unwrap();

        generate(&evaluation("x86_64"), tmp.path()).unwrap();
        let outcome = generate(&evaluation("armv7hf"), tmp.path()).unwrap();
        assert!(!outcome.fresh);

        let toolchain = std::fs::read_to_string(tmp.path().join(TOOLCHAIN_FILE)).unwrap();
        assert!(toolchain.contains("CMAKE_C_COMPILER"));
    }

    #[test]
    fn test_deleted_output_is_regenerated() {
        let tmp = TempDir::new().unwrap();
        let eval = evaluation("armv7hf");

        generate(&eval, tmp.path()).unwrap();
        std::fs::remove_file(tmp.path().join(DEPS_FILE)).unwrap();

        let outcome = generate(&eval, tmp.path()).unwrap();
        assert!(!outcome.fresh);
        assert!(tmp.path().join(DEPS_FILE).exists());
    }
}
