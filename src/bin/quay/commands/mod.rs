//! Command implementations

use std::path::Path;

use anyhow::Result;

use crate::cli::SettingsArgs;
use quay::core::options::OptionAssignment;
use quay::core::Workspace;
use quay::ops::{evaluate as evaluate_descriptor, resolve_settings, Evaluation};
use quay::util::diagnostic::{emit, Diagnostic};
use quay::GlobalContext;

pub mod completions;
pub mod evaluate;
pub mod generate;
pub mod init;
pub mod options;
pub mod requires;
pub mod toolchain;

/// Load the workspace, noting when the built-in descriptor is in use.
pub fn load_workspace(ctx: &GlobalContext, manifest_path: Option<&Path>) -> Result<Workspace> {
    let ws = Workspace::load(ctx, manifest_path)?;
    if ws.is_builtin() && ctx.is_verbose() {
        emit(
            &Diagnostic::note("no Quay.toml found; using the built-in descriptor")
                .with_suggestion("Run `quay init` to write it out and customize it"),
            ctx.color(),
        );
    }
    Ok(ws)
}

/// Load the workspace and evaluate it with the given settings.
pub fn load_evaluation(
    ctx: &GlobalContext,
    manifest_path: Option<&Path>,
    args: &SettingsArgs,
) -> Result<(Workspace, Evaluation)> {
    let ws = load_workspace(ctx, manifest_path)?;
    let config = ctx.load_config(ws.root());

    let settings = resolve_settings(
        ws.descriptor(),
        &config,
        args.arch.as_deref(),
        args.build_type.as_deref(),
    )?;

    let overrides = args
        .options
        .iter()
        .map(|s| s.parse::<OptionAssignment>())
        .collect::<Result<Vec<_>, _>>()?;

    let evaluation = evaluate_descriptor(ws.descriptor(), &settings, &overrides)?;
    Ok((ws, evaluation))
}
