//! `quay toolchain` command

use std::path::Path;

use anyhow::Result;

use crate::cli::ToolchainArgs;
use quay::core::profile::ArchitectureProfile;
use quay::core::settings::Arch;
use quay::util::diagnostic::{emit, suggestions, Diagnostic};
use quay::GlobalContext;

pub fn execute(ctx: &GlobalContext, manifest_path: Option<&Path>, args: ToolchainArgs) -> Result<()> {
    let ws = super::load_workspace(ctx, manifest_path)?;
    let config = ctx.load_config(ws.root());

    let arch = args
        .arch
        .or(config.settings.arch)
        .map(Arch::new)
        .unwrap_or_else(Arch::host);

    println!("Toolchain for {}:", arch);
    println!();

    let profile = ArchitectureProfile::select(&arch, ws.descriptor().embedded());
    let Some(embedded) = profile.embedded() else {
        println!("  Host build; the generator picks the default compilers.");
        return Ok(());
    };

    let mut missing = Vec::new();
    for (label, path) in [("CC", &embedded.cc), ("CXX", &embedded.cxx)] {
        let status = if which::which(path).is_ok() {
            "found"
        } else {
            missing.push(path.display().to_string());
            "not found"
        };
        println!("  {:<8}{} ({})", format!("{}:", label), path.display(), status);
    }

    let sysroot_status = if embedded.sysroot.is_dir() {
        "found"
    } else {
        "not found"
    };
    println!(
        "  {:<8}{} ({})",
        "Sysroot:",
        embedded.sysroot.display(),
        sysroot_status
    );
    println!("  {:<8}{}", "Flags:", embedded.cpu_flags);

    if !missing.is_empty() {
        println!();
        let mut diag = Diagnostic::warning("cross compiler not found")
            .with_suggestion(suggestions::INSTALL_CROSS);
        for path in missing {
            diag = diag.with_context(format!("missing: {}", path));
        }
        emit(&diag, ctx.color());
    }

    if ctx.is_verbose() {
        println!();
        println!("Find roots:");
        for root in &embedded.find_root {
            println!("  {}", root.display());
        }
    }

    Ok(())
}
