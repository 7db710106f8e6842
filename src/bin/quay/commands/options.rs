//! `quay options` command

use std::path::Path;

use anyhow::Result;

use crate::cli::OptionsArgs;
use quay::GlobalContext;

pub fn execute(ctx: &GlobalContext, manifest_path: Option<&Path>, args: OptionsArgs) -> Result<()> {
    let (ws, evaluation) = super::load_evaluation(ctx, manifest_path, &args.settings)?;
    let defaults = ws.descriptor().options().entries();

    println!("Options for {}:", evaluation.settings.arch);
    for ((package, option, value), (_, _, default)) in
        evaluation.options.entries().into_iter().zip(defaults)
    {
        if value == default {
            println!("  {}:{}={}", package, option, value);
        } else {
            println!("  {}:{}={}    # default: {}", package, option, value, default);
        }
    }

    Ok(())
}
