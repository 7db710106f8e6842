//! `quay generate` command

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::GenerateArgs;
use quay::ops::generate;
use quay::GlobalContext;

pub fn execute(ctx: &GlobalContext, manifest_path: Option<&Path>, args: GenerateArgs) -> Result<()> {
    let (ws, evaluation) = super::load_evaluation(ctx, manifest_path, &args.settings)?;
    let config = ctx.load_config(ws.root());

    let override_dir = args
        .output_dir
        .as_deref()
        .or(config.generate.output_dir.as_deref());
    let output_dir = ws.output_dir(&evaluation.settings, override_dir);

    let outcome = generate(&evaluation, &output_dir).with_context(|| {
        format!(
            "could not write generator files to {}",
            output_dir.display()
        )
    })?;

    if outcome.fresh {
        println!("Up to date: {}", outcome.output_dir.display());
    } else {
        for file in &outcome.files {
            println!("Wrote {}", file.display());
        }
    }

    Ok(())
}
